use crate::{FormMode, RosterStore};

use roster_core::{MemberDraft, MemberField, MemberId};

use log::{debug, warn};

/// View-model for the member form.
///
/// Owns the roster, the draft, and the edit selection, and keeps the three
/// consistent: every handler that mutates the selection or the roster
/// re-synchronizes the draft before returning, so the draft always reflects
/// the current selection by the next render.
#[derive(Debug, Clone)]
pub struct RosterEditor {
    roster: RosterStore,
    selection: Option<MemberId>,
    draft: MemberDraft,
}

impl RosterEditor {
    pub fn new(roster: RosterStore) -> Self {
        let mut editor = Self {
            roster,
            selection: None,
            draft: MemberDraft::default(),
        };
        editor.resync();
        editor
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn draft(&self) -> &MemberDraft {
        &self.draft
    }

    pub fn selection(&self) -> Option<MemberId> {
        self.selection
    }

    pub fn mode(&self) -> FormMode {
        match self.selection {
            Some(id) => FormMode::Edit { id },
            None => FormMode::Create,
        }
    }

    /// Applies one field edit to the draft. Touches nothing else.
    pub fn set_field(&mut self, field: MemberField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Enters edit mode for `id`.
    ///
    /// An id with no matching member is not an error; the draft simply
    /// resets to empty.
    pub fn edit(&mut self, id: MemberId) {
        debug!("Edit requested for member {id}");
        self.selection = Some(id);
        self.resync();
    }

    /// Commits the draft: appends in create mode, replaces the selected
    /// member's fields in edit mode. Always returns to create mode with an
    /// empty draft.
    ///
    /// Returns the affected member's id, or None when the edit target no
    /// longer exists (the roster is left untouched in that case).
    pub fn submit(&mut self) -> Option<MemberId> {
        let committed = match self.selection {
            None => {
                let id = self.roster.append(&self.draft);
                debug!("Created member {id}");
                Some(id)
            }
            Some(id) => {
                if self.roster.replace(id, &self.draft) {
                    debug!("Updated member {id}");
                    Some(id)
                } else {
                    warn!("Submit targeted missing member {id}; roster unchanged");
                    None
                }
            }
        };
        self.selection = None;
        self.resync();
        committed
    }

    /// Rebuilds the draft from the current selection: a copy of the
    /// selected member's fields, or empty strings when nothing (or nothing
    /// that still exists) is selected. Discards unsaved field edits.
    fn resync(&mut self) {
        self.draft = match self.selection.and_then(|id| self.roster.find(id)) {
            Some(member) => member.to_draft(),
            None => MemberDraft::default(),
        };
    }
}
