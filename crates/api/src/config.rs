//! Server configuration loaded from environment variables.

use lectern_ratings::{DEFAULT_AUTHORIZATION, DEFAULT_SCHOOL_ID};

/// Server configuration.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Campus-directory lookup base URL (`GET <base>/<id>`).
    pub directory_base_url: String,
    /// Ratings GraphQL endpoint URL.
    pub ratings_endpoint: String,
    /// Authorization header value for the ratings endpoint.
    pub ratings_authorization: String,
    /// School scope identifier used when a request supplies none.
    pub ratings_school_id: String,
}

impl ApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                      |
    /// |-------------------------|----------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                    |
    /// | `PORT`                  | `3000`                                       |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                      |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                         |
    /// | `DIRECTORY_BASE_URL`    | `https://campusdirectory.ucsc.edu/api/uid`   |
    /// | `RATINGS_ENDPOINT`      | `https://www.ratemyprofessors.com/graphql`   |
    /// | `RATINGS_AUTHORIZATION` | the public endpoint's fixed header value     |
    /// | `RATINGS_SCHOOL_ID`     | the default school scope                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let directory_base_url = std::env::var("DIRECTORY_BASE_URL")
            .unwrap_or_else(|_| "https://campusdirectory.ucsc.edu/api/uid".into());

        let ratings_endpoint = std::env::var("RATINGS_ENDPOINT")
            .unwrap_or_else(|_| "https://www.ratemyprofessors.com/graphql".into());

        let ratings_authorization =
            std::env::var("RATINGS_AUTHORIZATION").unwrap_or_else(|_| DEFAULT_AUTHORIZATION.into());

        let ratings_school_id =
            std::env::var("RATINGS_SCHOOL_ID").unwrap_or_else(|_| DEFAULT_SCHOOL_ID.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            directory_base_url,
            ratings_endpoint,
            ratings_authorization,
            ratings_school_id,
        }
    }
}
