pub mod logger;
pub use logger::{LoggingConfig, LoggingError, build_filter, init_with_config};
