//! Client for the Enka profile endpoint.
//!
//! Wraps `GET {api_url}/uid/{uid}` and checks the minimal response shape
//! the resolver depends on.

use std::sync::Arc;

use enka_core::error::{EnkaError, RATE_LIMITED_MESSAGE};
use enka_core::profile::EnkaApiResponse;

use crate::config::SharedConfig;
use crate::http::{HttpFetch, HttpResponse};

/// Live data client for a single Enka API deployment.
#[derive(Clone)]
pub struct EnkaApi {
    fetcher: Arc<dyn HttpFetch>,
    config: SharedConfig,
}

impl EnkaApi {
    pub fn new(fetcher: Arc<dyn HttpFetch>, config: SharedConfig) -> Self {
        Self { fetcher, config }
    }

    /// URL of the profile endpoint for `uid`.
    ///
    /// With `info` set, only `playerInfo` is requested (`?info`), which is
    /// all the resolver needs.
    pub fn player_url(&self, uid: &str, info: bool) -> String {
        build_player_url(&self.config.snapshot().api_url, uid, info)
    }

    /// Fetch a player's raw profile.
    ///
    /// Non-2xx statuses become [`EnkaError::ApiStatus`]; a JSON body
    /// without `playerInfo` becomes [`EnkaError::InvalidResponse`].
    pub async fn fetch_player_data(
        &self,
        uid: &str,
        info: bool,
    ) -> Result<EnkaApiResponse, EnkaError> {
        let config = self.config.snapshot();
        let url = build_player_url(&config.api_url, uid, info);

        tracing::debug!(uid, url = %url, "Fetching player profile");
        let response = self.fetcher.get(&url, &config.user_agent).await?;

        Self::parse_response(uid, response)
    }

    /// [`fetch_player_data`](Self::fetch_player_data) with `info` set, and
    /// a clearer message when the API rate limits us. No retry happens.
    pub async fn get_player_data(&self, uid: &str) -> Result<EnkaApiResponse, EnkaError> {
        match self.fetch_player_data(uid, true).await {
            Err(e) if e.is_rate_limited() => {
                tracing::warn!(uid, "Enka API rate limit hit");
                Err(EnkaError::ApiStatus {
                    status: 429,
                    message: RATE_LIMITED_MESSAGE.to_string(),
                })
            }
            other => other,
        }
    }

    // ---- private helpers ----

    fn parse_response(uid: &str, response: HttpResponse) -> Result<EnkaApiResponse, EnkaError> {
        if !response.is_success() {
            tracing::warn!(uid, status = response.status, "Profile request failed");
            return Err(EnkaError::ApiStatus {
                status: response.status,
                message: status_message(&response),
            });
        }

        let value: serde_json::Value = response
            .json()
            .map_err(|e| EnkaError::Transport(format!("failed to parse response body: {e}")))?;

        if value.get("playerInfo").map_or(true, |v| v.is_null()) {
            return Err(EnkaError::InvalidResponse("missing playerInfo".into()));
        }

        serde_json::from_value(value)
            .map_err(|e| EnkaError::InvalidResponse(format!("malformed playerInfo: {e}")))
    }
}

/// Longest slice of an error body carried into [`EnkaError::ApiStatus`].
pub const MAX_ERROR_BODY_BYTES: usize = 256;

/// Error text for a non-2xx response: the trimmed body capped at
/// [`MAX_ERROR_BODY_BYTES`], or the canonical reason phrase when the body
/// is blank.
fn status_message(response: &HttpResponse) -> String {
    let text = response.text();
    let body = text.trim();
    if body.is_empty() {
        return reqwest::StatusCode::from_u16(response.status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("<empty body>")
            .to_string();
    }
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

fn build_player_url(api_url: &str, uid: &str, info: bool) -> String {
    if info {
        format!("{api_url}/uid/{uid}?info")
    } else {
        format!("{api_url}/uid/{uid}")
    }
}
