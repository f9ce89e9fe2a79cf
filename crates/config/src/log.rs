use crate::ConfigError;

/// Levels accepted in `CFR_LOG_LEVEL`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", HTTP_LEVEL];

/// Pseudo-level: `info` everywhere plus request tracing in the HTTP client.
pub const HTTP_LEVEL: &str = "http";

const HTTP_DIRECTIVE: &str = "info,cf_routes::client=debug";

/// Translate a configured level into an `EnvFilter` directive string.
pub fn filter_directive(level: &str) -> &str {
    if level == HTTP_LEVEL {
        HTTP_DIRECTIVE
    } else {
        level
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Env: CFR_LOG_LEVEL, one of [`LOG_LEVELS`]. Default: info
    pub level: String,

    /// Env: CFR_LOG_JSON. Default: false
    pub json: bool,

    /// Env: CFR_LOG_STRIP_ANSI. Default: false
    pub strip_ansi: bool,
}

pub(crate) fn default_level() -> String {
    "info".to_string()
}

impl LogConfig {
    pub fn directive(&self) -> &str {
        filter_directive(&self.level)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if LOG_LEVELS.contains(&self.level.as_str()) {
            return Ok(());
        }

        Err(ConfigError::ValidateError(format!(
            "Invalid log level '{}'. Must be one of: {}",
            self.level,
            LOG_LEVELS.join(", ")
        )))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            strip_ansi: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_level(level: &str) -> LogConfig {
        LogConfig {
            level: level.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_http_level_is_accepted() {
        let config = with_level("http");
        assert!(config.validate().is_ok());
        assert_eq!(config.directive(), "info,cf_routes::client=debug");
    }

    #[test]
    fn test_standard_levels_pass_through() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let config = with_level(level);
            assert!(config.validate().is_ok(), "Level {} should be valid", level);
            assert_eq!(config.directive(), level);
        }
    }

    #[test]
    fn test_target_directives_are_rejected() {
        // EnvFilter would accept these, but they are not a level.
        for level in ["cf_routes=debug", "INFO", ""] {
            assert!(with_level(level).validate().is_err(), "{:?} accepted", level);
        }
    }

    #[test]
    fn test_error_lists_accepted_levels() {
        let err = with_level("loud").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Invalid log level 'loud'. \
             Must be one of: trace, debug, info, warn, error, http"
        );
    }
}
