// Shared test harness: runs the real server on an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use devops_demo_server::config::{
    AppState, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};
use devops_demo_server::server;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: None,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            // Keep test output quiet
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
    }
}

/// Bind an ephemeral port, spawn the server, and return its base URL.
pub async fn spawn_server() -> String {
    let cfg = test_config();
    let state = Arc::new(AppState::new(&cfg));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr: SocketAddr = listener.local_addr().expect("local_addr");
    let shutdown = Arc::new(Notify::new());

    tokio::spawn(server::serve(listener, state, shutdown));

    format!("http://{addr}")
}
