//! GraphQL client for the ratings teacher search.
//!
//! Wraps the ratings endpoint's POST interface using [`reqwest`]. The
//! [`RatingsSearch`] trait is the seam the cache component depends on, so
//! tests can substitute a scripted searcher.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use lectern_core::ratings::TeacherCandidate;

use crate::messages::SearchResponse;
use crate::query::{build_search_variables, TEACHER_SEARCH_QUERY};

/// Authorization header value the public endpoint expects.
pub const DEFAULT_AUTHORIZATION: &str = "Basic dGVzdDp0ZXN0";

/// Errors from the ratings GraphQL layer.
///
/// These never cross the cache boundary; [`crate::RatingsCache`] absorbs
/// them into a `None` result.
#[derive(Debug, thiserror::Error)]
pub enum RatingsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Ratings API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Fuzzy teacher search against the ratings service.
///
/// `Ok(None)` is a modeled outcome: the query ran but produced no usable
/// candidate list (e.g. a payload-level GraphQL failure). `Err` is reserved
/// for transport-level failures.
#[async_trait]
pub trait RatingsSearch: Send + Sync {
    /// Search candidates for `name`, optionally scoped to `school_id`,
    /// bypassing any cache.
    async fn search_candidates(
        &self,
        name: &str,
        school_id: Option<&str>,
    ) -> Result<Option<Vec<TeacherCandidate>>, RatingsApiError>;
}

/// HTTP client for the ratings GraphQL endpoint.
pub struct RatingsClient {
    client: reqwest::Client,
    endpoint: String,
    authorization: String,
    // Set once on the first successful response, read-only thereafter.
    connected: AtomicBool,
}

impl RatingsClient {
    /// Create a new client for the ratings endpoint.
    pub fn new(endpoint: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, authorization)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (connection pooling across upstreams).
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        authorization: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            authorization: authorization.into(),
            connected: AtomicBool::new(false),
        }
    }

    /// Log the first successful connection exactly once per client.
    fn note_connected(&self) {
        if !self.connected.swap(true, Ordering::Relaxed) {
            tracing::info!(endpoint = %self.endpoint, "ratings endpoint connection established");
        }
    }
}

#[async_trait]
impl RatingsSearch for RatingsClient {
    async fn search_candidates(
        &self,
        name: &str,
        school_id: Option<&str>,
    ) -> Result<Option<Vec<TeacherCandidate>>, RatingsApiError> {
        let variables = build_search_variables(name, school_id);
        let body = serde_json::json!({
            "query": TEACHER_SEARCH_QUERY,
            "variables": &variables,
        });

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RatingsApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        self.note_connected();

        let payload: SearchResponse = response.json().await?;

        // Payload-level errors are a modeled no-match, not a failure.
        if !payload.errors.is_empty() {
            let messages = payload
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::error!(search = %variables.text, errors = %messages, "ratings query-level failure");
            return Ok(None);
        }

        Ok(payload.into_candidates())
    }
}
