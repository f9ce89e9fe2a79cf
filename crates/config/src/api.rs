use crate::ConfigError;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the Cloud Controller API
    ///
    /// Env: CFR_API_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:9022
    pub url: String,

    /// Bearer token sent with every request
    ///
    /// Env: CFR_API_TOKEN
    /// Default: none
    pub token: Option<String>,

    /// Per-request timeout in seconds
    ///
    /// Env: CFR_API_TIMEOUT_SECS
    /// Default: 120
    pub timeout_secs: u64,
}

pub(crate) fn default_url() -> String {
    "http://127.0.0.1:9022".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    120
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidateError(
                "API URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid API URL '{}': {}", self.url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid URL scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "API timeout cannot be 0".to_string(),
            ));
        }

        if matches!(self.token.as_deref(), Some("")) {
            return Err(ConfigError::ValidateError(
                "API token cannot be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config() {
        let config = ApiConfig::default();
        assert_eq!(config.url, "http://127.0.0.1:9022");
        assert_eq!(config.token, None);
        assert_eq!(config.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_validate_empty_url() {
        let config = ApiConfig {
            url: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_url_format() {
        let config = ApiConfig {
            url: "not-a-valid-url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_scheme() {
        let config = ApiConfig {
            url: "ws://api.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_https_url() {
        let config = ApiConfig {
            url: "https://api.sys.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_zero() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_token() {
        let config = ApiConfig {
            token: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
