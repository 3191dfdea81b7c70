use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] roster_config::ConfigError),

    #[error("Logger init failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Terminal error: {source} {location}")]
    Terminal {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        AppError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn terminal(source: std::io::Error) -> Self {
        AppError::Terminal {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type AppResult<T> = StdResult<T, AppError>;
