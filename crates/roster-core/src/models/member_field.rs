use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The three editable fields of a member record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemberField {
    FirstName,
    LastName,
    Bio,
}

impl MemberField {
    /// All fields in form order.
    pub const ALL: [MemberField; 3] = [Self::FirstName, Self::LastName, Self::Bio];

    pub fn as_str(&self) -> &str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Bio => "bio",
        }
    }

    /// Human-facing form label.
    pub fn label(&self) -> &str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Bio => "Bio",
        }
    }
}

impl FromStr for MemberField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "bio" => Ok(Self::Bio),
            _ => Err(CoreError::InvalidMemberField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
