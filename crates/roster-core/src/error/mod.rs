use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid member field: {value} {location}")]
    InvalidMemberField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid member id: {value} {location}")]
    InvalidMemberId {
        value: String,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
