use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_FILENAME, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log directory, relative to the config directory
    pub dir: String,
    /// Log file name inside `dir`. None sends logs to stderr instead; the
    /// terminal UI owns stdout, so that is only useful when redirected.
    pub file: Option<String>,
    /// Colored stderr output (ignored when logging to a file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: Some(String::from(DEFAULT_LOG_FILENAME)),
            colored: false,
        }
    }
}
