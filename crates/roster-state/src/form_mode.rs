use roster_core::MemberId;

/// Current mode of the member form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// No member selected; submission appends a new member
    Create,
    /// An existing member is selected; submission replaces its fields
    Edit { id: MemberId },
}

impl FormMode {
    /// Short label for the form heading ("Add a Team Member" / "Edit a
    /// Team Member").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Add",
            Self::Edit { .. } => "Edit",
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }
}
