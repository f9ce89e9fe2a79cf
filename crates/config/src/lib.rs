mod api;
mod args;
mod error;
mod log;

pub use api::ApiConfig;
pub use args::Args;
pub use error::ConfigError;
pub use log::{HTTP_LEVEL, LOG_LEVELS, LogConfig, filter_directive};

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix for every setting
pub const ENV_PREFIX: &str = "CFR_";

#[derive(Debug, Clone, Default)]
pub struct RoutesConfig {
    pub api: ApiConfig,
    pub log: LogConfig,
}

/// Flat view of the `CFR_*` variables as envy sees them.
#[derive(Debug, Deserialize)]
struct EnvVars {
    #[serde(default = "api::default_url")]
    api_url: String,
    #[serde(default)]
    api_token: Option<String>,
    #[serde(default = "api::default_timeout_secs")]
    api_timeout_secs: u64,
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
}

impl EnvVars {
    fn into_config(self) -> RoutesConfig {
        RoutesConfig {
            api: ApiConfig {
                url: self.api_url,
                token: self.api_token,
                timeout_secs: self.api_timeout_secs,
            },
            log: LogConfig {
                level: self.log_level,
                json: self.log_json,
                strip_ansi: self.log_strip_ansi,
            },
        }
    }
}

impl RoutesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Build and validate a config from an explicit set of `CFR_*` variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: EnvVars = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        let config = vars.into_config();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Load variables from a `.env` file into the process environment.
///
/// A missing file is not an error; variables already set in the
/// environment take precedence over the file.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }

    dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(true)
}
