//! HTTP client for the hosted CMS query API.
//!
//! Executes GROQ queries against
//! `https://{project_id}.{host}/v{api_version}/data/query/{dataset}` and
//! decodes the `{"result": ...}` envelope. Queries are read-only; the
//! bearer token is only needed for non-public datasets.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Default dataset when `CMS_DATASET` is not set.
const DEFAULT_DATASET: &str = "production";

/// Default API version date when `CMS_API_VERSION` is not set.
const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Live API host.
const API_HOST: &str = "api.sanity.io";

/// CDN-cached API host, used when `CMS_USE_CDN` is enabled.
const CDN_HOST: &str = "apicdn.sanity.io";

/// Errors from the CMS query layer.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CMS returned a non-2xx status code.
    #[error("CMS API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// An image asset reference did not match the expected shape.
    #[error("Invalid image asset reference: {0}")]
    InvalidAssetRef(String),
}

/// Configuration for the CMS connection, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// CMS project identifier.
    pub project_id: String,
    /// Dataset name (defaults to `production`).
    pub dataset: String,
    /// API version date, e.g. `2024-01-01`.
    pub api_version: String,
    /// Optional bearer token for non-public datasets.
    pub token: Option<String>,
    /// Route queries through the CDN host.
    pub use_cdn: bool,
}

impl CmsConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `CMS_PROJECT_ID` is not set, signalling that the
    /// CMS is not configured and content lookups should fall back to empty
    /// results.
    ///
    /// | Variable          | Required | Default      |
    /// |-------------------|----------|--------------|
    /// | `CMS_PROJECT_ID`  | yes      | —            |
    /// | `CMS_DATASET`     | no       | `production` |
    /// | `CMS_API_VERSION` | no       | `2024-01-01` |
    /// | `CMS_API_TOKEN`   | no       | —            |
    /// | `CMS_USE_CDN`     | no       | `false`      |
    pub fn from_env() -> Option<Self> {
        let project_id = std::env::var("CMS_PROJECT_ID").ok().filter(|v| !v.is_empty())?;
        Some(Self {
            project_id,
            dataset: std::env::var("CMS_DATASET").unwrap_or_else(|_| DEFAULT_DATASET.to_string()),
            api_version: std::env::var("CMS_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
            token: std::env::var("CMS_API_TOKEN").ok().filter(|v| !v.is_empty()),
            use_cdn: std::env::var("CMS_USE_CDN")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

/// Query response envelope returned by the CMS.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// HTTP client for one CMS project/dataset.
pub struct CmsClient {
    client: reqwest::Client,
    config: CmsConfig,
}

impl CmsClient {
    /// Create a new client for the given configuration.
    pub fn new(config: CmsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: CmsConfig) -> Self {
        Self { client, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    /// Base URL of the query endpoint for this project and dataset.
    pub fn query_url(&self) -> String {
        let host = if self.config.use_cdn { CDN_HOST } else { API_HOST };
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.config.project_id, host, self.config.api_version, self.config.dataset
        )
    }

    /// Execute a GROQ query and decode the result.
    pub async fn query<T: DeserializeOwned>(&self, groq: &str) -> Result<T, CmsError> {
        self.query_with_params::<T>(groq, &[]).await
    }

    /// Execute a GROQ query with `$name` parameters.
    ///
    /// Parameter values are JSON-encoded per the query API convention
    /// (a string parameter arrives quoted).
    pub async fn query_with_params<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<T, CmsError> {
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            pairs.push((
                format!("${name}"),
                serde_json::to_string(value).unwrap_or_default(),
            ));
        }

        let mut request = self.client.get(self.query_url()).query(&pairs);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: QueryResponse<T> = response.json().await?;
        Ok(envelope.result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
