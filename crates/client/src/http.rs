//! Outbound HTTP seam.
//!
//! Everything that talks to the network goes through [`HttpFetch`], so the
//! live client and the reference store can be exercised against an
//! in-memory implementation. [`ReqwestFetcher`] is the production one.

use async_trait::async_trait;
use enka_core::error::EnkaError;
use serde::de::DeserializeOwned;

/// Status and raw body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Body as text, for error messages.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Issues GET requests.
///
/// Implementations return `Err` only when no response was obtained at all
/// ([`EnkaError::Transport`]); any status code, success or not, comes back
/// as an [`HttpResponse`].
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse, EnkaError>;
}

/// [`HttpFetch`] backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, EnkaError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| EnkaError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse, EnkaError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|e| EnkaError::Transport(format!("GET {url} failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| EnkaError::Transport(format!("failed to read body from {url}: {e}")))?;

        tracing::trace!(url, status, bytes = body.len(), "HTTP GET completed");

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
