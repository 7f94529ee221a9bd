// Signal handling module
//
// SIGTERM and SIGINT (Ctrl+C) trigger a graceful shutdown: the accept loop
// stops and in-flight connections finish naturally.

use std::sync::Arc;
use tokio::sync::Notify;

/// Install signal handlers that notify `shutdown` once (Unix)
#[cfg(unix)]
pub fn install(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                crate::logger::log_warning("SIGTERM received, shutting down");
            }
            _ = sigint.recv() => {
                crate::logger::log_warning("SIGINT received, shutting down");
            }
        }

        shutdown.notify_waiters();
    });
}

/// Fallback for non-Unix platforms - only handles Ctrl+C
#[cfg(not(unix))]
pub fn install(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            crate::logger::log_warning("Ctrl+C received, shutting down");
            shutdown.notify_waiters();
        }
    });
}
