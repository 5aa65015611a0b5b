use std::fmt;
use std::future::Future;

use reqwest::{header::USER_AGENT, Client, ClientBuilder, Response, StatusCode};

use crate::user_agent::random_user_agent;

/// Why a page could not be collected. Never fatal to a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The server answered with something other than 200.
    Status(u16),
    /// The request never produced a readable response.
    Transport(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Status(code) => write!(f, "{code}"),
            FetchFailure::Transport(reason) => write!(f, "{reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Page(String),
    Failed(FetchFailure),
}

/// One GET per call, classified as a page body or a failure.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = FetchOutcome> + Send;
}

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = ClientBuilder::new().build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch_url_response(&self, url: &str) -> anyhow::Result<Response> {
        // A new identity for every request, never reused.
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, random_user_agent())
            .send()
            .await?;
        Ok(response)
    }
}

impl PageFetcher for RequestClient {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        log::info!("GET {url}");
        let response = match self.fetch_url_response(url).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("request to {url} failed: {e}");
                return FetchOutcome::Failed(FetchFailure::Transport(e.to_string()));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("{url} answered {status}");
            return FetchOutcome::Failed(FetchFailure::Status(status.as_u16()));
        }

        match response.text().await {
            Ok(body) => {
                log::debug!("{url}: {} bytes", body.len());
                FetchOutcome::Page(body)
            }
            Err(e) => FetchOutcome::Failed(FetchFailure::Transport(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use crate::user_agent::USER_AGENTS;

    fn client() -> RequestClient {
        RequestClient::from_client(Client::builder().no_proxy().build().unwrap())
    }

    /// Answers a single request with `status_line` and `body`, returning the
    /// raw request head once served.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request: Vec<u8> = vec![];
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let length = if status_line.starts_with("204") {
                String::new()
            } else {
                format!("content-length: {}\r\n", body.len())
            };
            let response = format!("HTTP/1.1 {status_line}\r\n{length}connection: close\r\n\r\n{body}");
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });
        (format!("http://{addr}/real-madrid/kader/verein/418"), handle)
    }

    #[tokio::test]
    async fn ok_response_yields_page_body() {
        let (url, server) = serve_once("200 OK", "<table></table>").await;
        let outcome = client().fetch(&url).await;
        server.await.unwrap();
        assert_eq!(outcome, FetchOutcome::Page("<table></table>".to_string()));
    }

    #[tokio::test]
    async fn only_200_counts_as_success() {
        let (url, server) = serve_once("204 No Content", "").await;
        let outcome = client().fetch(&url).await;
        server.await.unwrap();
        assert_eq!(outcome, FetchOutcome::Failed(FetchFailure::Status(204)));

        let (url, server) = serve_once("404 Not Found", "missing").await;
        let outcome = client().fetch(&url).await;
        server.await.unwrap();
        assert_eq!(outcome, FetchOutcome::Failed(FetchFailure::Status(404)));
    }

    #[tokio::test]
    async fn closed_port_is_a_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let outcome = client().fetch(&format!("http://{addr}/")).await;
        assert!(matches!(outcome, FetchOutcome::Failed(FetchFailure::Transport(_))));
    }

    #[tokio::test]
    async fn request_carries_pooled_user_agent() {
        let (url, server) = serve_once("200 OK", "ok").await;
        client().fetch(&url).await;
        let request = server.await.unwrap();

        let user_agent = request
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("user-agent").then(|| value.trim().to_string())
            })
            .unwrap();
        assert!(USER_AGENTS.contains(&user_agent.as_str()));
    }
}
