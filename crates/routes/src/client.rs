use crate::api::GraceRequest;
use crate::error::ApiError;
use crate::request::RequestSpec;
use async_trait::async_trait;
use cf_routes_config::ApiConfig;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Default timeout for regular API requests (2 minutes)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Cloud Controller v2 API
#[derive(Clone)]
pub struct CloudControllerClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl CloudControllerClient {
    /// Create a new client with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a new client with custom timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url,
            client,
            token: None,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Self::with_timeout(config.url.as_str(), config.timeout())?;
        Ok(match &config.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, spec: &RequestSpec) -> Result<String, ApiError> {
        Ok(format!("{}{}", self.base_url, spec.path_and_query()?))
    }
}

#[async_trait]
impl GraceRequest for CloudControllerClient {
    async fn grace_request(&self, spec: RequestSpec) -> Result<Option<Value>, ApiError> {
        let url = self.url_for(&spec)?;
        tracing::debug!(method = %spec.method, url = %url, "Sending Cloud Controller request");

        let mut request = self.client.request(spec.method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, bytes = body.len(), "Cloud Controller responded");

        if !status.is_success() {
            return Err(ApiError::Status { status, url, body });
        }

        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(None);
        }

        let json: Value =
            serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })?;
        Ok(match json {
            Value::Null => None,
            json => Some(json),
        })
    }
}
