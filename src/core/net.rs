// src/core/net.rs
// Blocking HTTP GET. One attempt per request, no retries.

use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// "fetch(url) -> raw document". The pipeline only talks to this trait,
/// so tests can serve canned pages without a network.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// `timeout: None` keeps the client's own default.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| ScrapeError::fetch("<client setup>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::fetch(url, e))?;

        // Anything but a plain 200 counts as a failed fetch
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::fetch(url, format!("HTTP status {status}")));
        }
        resp.text().map_err(|e| ScrapeError::fetch(url, e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use super::*;

    /// Serve one canned response on loopback; the handle yields the raw request.
    fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/dialogue/npcs/Bob", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (url, handle)
    }

    // Same client as `new`, minus any proxy from the environment.
    fn loopback_fetcher() -> HttpFetcher {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(5))
            .no_proxy()
            .build()
            .unwrap();
        HttpFetcher { client }
    }

    #[test]
    fn not_found_is_fetch_error() {
        let (url, server) =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let err = loopback_fetcher().fetch(&url).unwrap_err();
        server.join().unwrap();

        match err {
            ScrapeError::Fetch { url: failed, reason } => {
                assert_eq!(failed, url);
                assert!(reason.contains("404"), "{reason}");
            }
            other => panic!("expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn ok_returns_body_and_sends_user_agent() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 15\r\nConnection: close\r\n\r\n<table></table>",
        );
        let body = loopback_fetcher().fetch(&url).unwrap();
        let request = server.join().unwrap();

        assert_eq!(body, "<table></table>");
        assert!(request.starts_with("GET /dialogue/npcs/Bob "), "{request}");
        assert!(request.to_ascii_lowercase().contains(&format!("user-agent: {}", USER_AGENT.to_ascii_lowercase())));
    }

    #[test]
    fn redirect_without_location_is_not_success() {
        let (url, server) = serve_once(
            "HTTP/1.1 301 Moved Permanently\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let err = loopback_fetcher().fetch(&url).unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, ScrapeError::Fetch { .. }));
    }
}
