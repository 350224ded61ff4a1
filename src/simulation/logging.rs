//! Logging and tracing configuration
//!
//! All console logging goes to stderr so that generated data piped through
//! stdout is never interleaved with diagnostics.

use std::io;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Error returned when the global subscriber cannot be installed
pub type LoggingInitError = Box<dyn std::error::Error + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether console output is JSON instead of human-readable
    pub json_format: bool,
    /// Whether to also log to a daily rolling file
    pub log_to_file: bool,
    /// Log file directory (if logging to file)
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

/// Keeps the background file writer alive; logs are flushed when dropped
#[derive(Debug)]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: env!("CARGO_PKG_NAME").to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration selected by the command line flags
    ///
    /// `debug` wins over `verbose`; a log directory adds JSON file output.
    pub fn from_flags(verbose: bool, debug: bool, log_dir: Option<&str>) -> Self {
        let mut config = Self::new();
        if debug {
            config = config.with_level(Level::DEBUG).with_span_events();
        } else if verbose {
            config = config.with_level(Level::INFO).with_span_events();
        }
        if let Some(dir) = log_dir {
            config = config.with_file_logging(dir);
        }
        config
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directive used when neither a custom filter nor `RUST_LOG` is set
    pub fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// The returned guard must be held for as long as file logs should be written.
    pub fn init(self) -> Result<LoggingGuard, LoggingInitError> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive())),
        };

        let (file_layer, file_guard) = if self.log_to_file {
            let log_dir = self.log_directory.as_deref().unwrap_or("logs");
            let (file_writer, guard) = non_blocking(rolling::daily(log_dir, &self.log_file_prefix));
            let layer = fmt::layer()
                .json()
                .with_writer(file_writer)
                .with_span_events(self.span_events());
            (Some(layer), Some(guard))
        } else {
            (None, None)
        };

        let json_console = self.json_format.then(|| {
            fmt::layer().json().with_writer(io::stderr).with_span_events(self.span_events())
        });
        let pretty_console = (!self.json_format).then(|| {
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_target(false)
                .with_span_events(self.span_events())
        });

        Registry::default()
            .with(env_filter)
            .with(file_layer)
            .with(json_console)
            .with(pretty_console)
            .try_init()?;

        info!(
            level = %self.level,
            json = self.json_format,
            log_directory = ?self.log_directory,
            "Logging initialized"
        );
        Ok(LoggingGuard { _file_guard: file_guard })
    }

    /// Initialize logging for testing (minimal output)
    pub fn init_test() -> Result<LoggingGuard, LoggingInitError> {
        Self::new().with_level(Level::WARN).without_ansi().init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_logging_config_creation() {
        let config = LoggingConfig::new();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.json_format);
        assert!(!config.log_to_file);
        assert!(config.log_directory.is_none());
        assert_eq!(config.log_file_prefix, "order-to-cash-event-log");
        assert!(!config.enable_span_events);
        assert!(config.enable_ansi);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn test_logging_config_builder_pattern() {
        let config = LoggingConfig::new()
            .with_level(Level::DEBUG)
            .with_json_format()
            .with_file_logging("test_logs")
            .with_file_prefix("test_prefix")
            .with_span_events()
            .without_ansi()
            .with_env_filter("debug");

        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);
        assert!(config.log_to_file);
        assert_eq!(config.log_directory, Some("test_logs".to_string()));
        assert_eq!(config.log_file_prefix, "test_prefix");
        assert!(config.enable_span_events);
        assert!(!config.enable_ansi);
        assert_eq!(config.env_filter, Some("debug".to_string()));
    }

    #[test]
    fn test_from_flags() {
        let quiet = LoggingConfig::from_flags(false, false, None);
        assert_eq!(quiet.level, Level::WARN);
        assert!(!quiet.enable_span_events);

        let verbose = LoggingConfig::from_flags(true, false, None);
        assert_eq!(verbose.level, Level::INFO);
        assert!(verbose.enable_span_events);

        let debug = LoggingConfig::from_flags(true, true, Some("logs"));
        assert_eq!(debug.level, Level::DEBUG);
        assert!(debug.log_to_file);
        assert_eq!(debug.log_directory.as_deref(), Some("logs"));
    }

    #[test]
    fn test_default_directive_targets_this_crate() {
        let config = LoggingConfig::new().with_level(Level::INFO);
        assert_eq!(config.default_directive(), "order_to_cash_event_log=INFO");
    }
}
