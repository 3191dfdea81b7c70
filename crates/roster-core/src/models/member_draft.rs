use crate::models::member_field::MemberField;

use serde::{Deserialize, Serialize};

/// Unsaved form content: the three editable fields, no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl MemberDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            bio: bio.into(),
        }
    }

    pub fn get(&self, field: MemberField) -> &str {
        match field {
            MemberField::FirstName => &self.first_name,
            MemberField::LastName => &self.last_name,
            MemberField::Bio => &self.bio,
        }
    }

    /// Overwrites one field. No trimming, no validation, no length limits.
    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        match field {
            MemberField::FirstName => self.first_name = value.into(),
            MemberField::LastName => self.last_name = value.into(),
            MemberField::Bio => self.bio = value.into(),
        }
    }
}
