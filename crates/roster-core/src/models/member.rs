use crate::models::member_draft::MemberDraft;
use crate::models::member_id::MemberId;

use serde::{Deserialize, Serialize};

/// A roster entry. Identity is `id`; the text fields are freely mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl Member {
    pub fn new(
        id: MemberId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            bio: bio.into(),
        }
    }

    pub fn from_draft(id: MemberId, draft: &MemberDraft) -> Self {
        Self::new(id, &draft.first_name, &draft.last_name, &draft.bio)
    }

    /// "First Last" as shown in the member list.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replaces the three text fields, leaving `id` untouched.
    pub fn apply_draft(&mut self, draft: &MemberDraft) {
        self.first_name = draft.first_name.clone();
        self.last_name = draft.last_name.clone();
        self.bio = draft.bio.clone();
    }

    /// Copy of the text fields, for populating the form in edit mode.
    pub fn to_draft(&self) -> MemberDraft {
        MemberDraft::new(&self.first_name, &self.last_name, &self.bio)
    }
}
