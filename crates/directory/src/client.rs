//! REST client for the campus-directory lookup endpoint.
//!
//! Wraps the directory's single-entity HTTP API (`GET <base>/<id>`) using
//! [`reqwest`]. The [`DirectoryFetch`] trait is the seam the cache component
//! depends on, so tests can substitute a scripted fetcher.

use async_trait::async_trait;

use lectern_core::directory::DirectoryProfile;

/// Errors from the directory REST layer.
///
/// These never cross the cache boundary; [`crate::DirectoryCache`] absorbs
/// them into the `{data: None, success: false}` sentinel.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The directory returned a non-2xx status code.
    #[error("Directory API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response with no usable body.
    #[error("Directory returned an empty payload")]
    EmptyPayload,

    /// A 2xx response whose body did not match the expected schema.
    #[error("Malformed directory payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Single-entity directory lookup, keyed by the stable campus identifier.
#[async_trait]
pub trait DirectoryFetch: Send + Sync {
    /// Fetch the person record for `id` straight from the upstream,
    /// bypassing any cache.
    async fn fetch_profile(&self, id: &str) -> Result<DirectoryProfile, DirectoryApiError>;
}

/// HTTP client for the campus directory.
pub struct DirectoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new client for the directory API.
    ///
    /// * `base_url` - lookup base, e.g. `https://campusdirectory.example.edu/api/uid`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (connection pooling across upstreams).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DirectoryFetch for DirectoryClient {
    async fn fetch_profile(&self, id: &str) -> Result<DirectoryProfile, DirectoryApiError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), id);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DirectoryApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        if payload.is_null() || payload.as_object().is_some_and(|o| o.is_empty()) {
            return Err(DirectoryApiError::EmptyPayload);
        }

        Ok(serde_json::from_value(payload)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
