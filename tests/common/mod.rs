//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use session_relay::{RelayConfig, RelayServer};

/// Request targets (path + query) captured by a mock upstream.
pub type CapturedTargets = Arc<Mutex<Vec<String>>>;

/// Start a mock upstream that answers every request with a fixed body and
/// records the request target of every call it receives.
pub async fn start_mock_upstream(body: &'static str) -> (SocketAddr, CapturedTargets) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let targets: CapturedTargets = Arc::new(Mutex::new(Vec::new()));
    let recorded = targets.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let recorded = recorded.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]);

                        // Request line: "GET /cr_start_session?... HTTP/1.1"
                        if let Some(target) = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                        {
                            recorded.lock().unwrap().push(target.to_string());
                        }

                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, targets)
}

/// Spawn a relay pointed at the given upstream URL; returns the relay's
/// listen address.
pub async fn start_relay(upstream_url: String) -> SocketAddr {
    let mut config = RelayConfig::default();
    config.upstream.base_url = upstream_url;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = RelayServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    // Give the accept loop a moment to come up; the listener is already
    // bound, so connections queue either way.
    tokio::time::sleep(Duration::from_millis(50)).await;

    addr
}

/// A non-pooling client, so each request exercises a fresh connection.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// An address nothing is listening on, for transport-failure tests.
pub fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
