// Server module entry
// Accept loop, connection serving, and shutdown signals.

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_reusable_listener;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;

/// How long shutdown waits for in-flight connections before giving up
const DRAIN_DEADLINE: std::time::Duration = std::time::Duration::from_secs(5);

/// Run the accept loop until `shutdown` is notified.
///
/// Each accepted connection is served in its own task; the loop itself
/// only accepts, checks limits, and hands off. On shutdown, in-flight
/// connections are drained for up to `DRAIN_DEADLINE` before returning,
/// since the caller may drop the runtime (and with it any still-running
/// connection tasks) right after.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_shutdown(active_connections.load(Ordering::SeqCst));
                break;
            }
        }
    }

    drain_connections(&active_connections).await;
    Ok(())
}

/// Wait for active connections to finish, up to `DRAIN_DEADLINE`.
async fn drain_connections(active_connections: &AtomicUsize) {
    let deadline = tokio::time::Instant::now() + DRAIN_DEADLINE;

    while active_connections.load(Ordering::SeqCst) > 0 {
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown drain timed out with {} connections still active",
                active_connections.load(Ordering::SeqCst)
            ));
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(&Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            http: HttpConfig {
                server_name: "DevOps-Demo/1.0".to_string(),
                security_headers: true,
            },
        }))
    }

    #[tokio::test]
    async fn test_serve_returns_after_shutdown_notify() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let shutdown = Arc::new(Notify::new());

        let handle = tokio::spawn(serve(listener, test_state(), Arc::clone(&shutdown)));

        // notify_one stores a permit, so this cannot race the select
        shutdown.notify_one();

        let result = tokio::time::timeout(std::time::Duration::from_secs(2), handle).await;
        assert!(result.expect("serve did not stop on shutdown").is_ok());
    }

    #[tokio::test]
    async fn test_drain_returns_immediately_with_no_connections() {
        let active = AtomicUsize::new(0);
        let started = tokio::time::Instant::now();
        drain_connections(&active).await;
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }
}
