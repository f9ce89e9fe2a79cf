use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install global subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
}

impl<'a> From<&'a cf_routes_config::LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a cf_routes_config::LogConfig) -> Self {
        Self {
            level: config.level.as_str(),
            json_format: config.json,
            strip_ansi: config.strip_ansi,
        }
    }
}

/// Build the filter for `level`; see [`cf_routes_config::filter_directive`].
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = cf_routes_config::filter_directive(level);
    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Initialize tracing/logging with the specified configuration
///
/// Logs go to stderr so that stdout only carries the lookup result.
///
/// # Examples
/// ```no_run
/// use cf_routes::logging::{self, LoggingConfig};
///
/// logging::init_with_config(LoggingConfig {
///     level: "debug",
///     json_format: false,
///     strip_ansi: false,
/// })?;
/// # Ok::<(), cf_routes::logging::LoggingError>(())
/// ```
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_format {
        let fmt_layer = fmt::layer().json().with_writer(std::io::stderr);
        registry.with(fmt_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi)
            .with_writer(std::io::stderr);
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
