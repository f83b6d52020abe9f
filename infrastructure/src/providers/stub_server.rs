//! In-process HTTP stub for provider tests.
//!
//! Speaks just enough HTTP/1.1 over a raw `TcpListener` to answer one
//! request per connection from a fixed route table.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Clone)]
pub(crate) struct StubResponse {
    status: u16,
    reason: &'static str,
    content_type: &'static str,
    body: String,
    delay: Duration,
}

impl StubResponse {
    pub(crate) fn text(body: &str) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type: "text/plain",
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn json(body: &str) -> Self {
        Self {
            content_type: "application/json",
            ..Self::text(body)
        }
    }

    pub(crate) fn status(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            ..Self::text("")
        }
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A request as seen by the stub
#[derive(Debug, Clone)]
pub(crate) struct SeenRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
}

pub(crate) struct StubServer {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StubServer {
    /// Routes are keyed by `"METHOD /path"`. Unknown routes answer 404.
    pub(crate) async fn start(routes: Vec<(&str, StubResponse)>) -> Self {
        let routes: Arc<HashMap<String, StubResponse>> = Arc::new(
            routes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_by_server = seen.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                let seen = seen_by_server.clone();
                tokio::spawn(async move {
                    let _ = handle(stream, &routes, &seen).await;
                });
            }
        });

        Self { addr, seen }
    }

    pub(crate) fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub(crate) fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, method: &str) -> usize {
        self.requests().iter().filter(|r| r.method == method).count()
    }
}

async fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, StubResponse>,
    seen: &Mutex<Vec<SeenRequest>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();
    let headers = lines
        .take_while(|l| !l.is_empty())
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
        .collect();

    let response = routes
        .get(&format!("{} {}", method, path))
        .cloned()
        .unwrap_or_else(|| StubResponse::status(404, "Not Found"));

    seen.lock().unwrap().push(SeenRequest {
        method: method.clone(),
        path,
        headers,
    });

    tokio::time::sleep(response.delay).await;

    let body = if method == "HEAD" { "" } else { response.body.as_str() };
    let reply = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.reason,
        response.content_type,
        body.len(),
        body
    );
    stream.write_all(reply.as_bytes()).await?;
    stream.shutdown().await
}
