//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use param_router::config::RouterConfig;
use param_router::http::HttpServer;
use param_router::lifecycle::Shutdown;
use param_router::routing::RouteTable;

/// Serve `table` on `addr` in the background.
///
/// The returned [`Shutdown`] stops the server when triggered.
pub async fn start_server(addr: SocketAddr, table: RouteTable) -> Shutdown {
    let mut config = RouterConfig::default();
    config.listener.bind_address = addr.to_string();

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, table);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// Client that never reuses connections, so shutdown tests see fresh sockets.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
