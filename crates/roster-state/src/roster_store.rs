use roster_core::{Member, MemberDraft, MemberId};

use log::debug;

/// Ordered collection of members plus the identifier counter.
///
/// The counter lives on the store so identifier assignment has a single
/// owner. Ids are strictly increasing and never reused within a session.
#[derive(Debug, Clone)]
pub struct RosterStore {
    members: Vec<Member>,
    next_id: u64,
}

impl RosterStore {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-populated with the sample members every session starts with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.append(&MemberDraft::new(
            "Alice",
            "Smith",
            "Passionate about front-end development and user experience. \
             I love creating intuitive and visually appealing web interfaces.",
        ));
        store.append(&MemberDraft::new(
            "Bob",
            "Johnson",
            "Aspiring web developer with a background in graphic design. \
             I enjoy bringing creativity and aesthetics to the digital world.",
        ));
        store
    }

    /// Members in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn find(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.find(id).is_some()
    }

    /// Appends a new member built from `draft`, returning its assigned id.
    pub fn append(&mut self, draft: &MemberDraft) -> MemberId {
        let id = self.allocate_id();
        self.members.push(Member::from_draft(id, draft));
        debug!("Appended member {id}");
        id
    }

    /// Replaces the text fields of the member with `id`, keeping its
    /// identifier and position. Returns false when no such member exists.
    pub fn replace(&mut self, id: MemberId, draft: &MemberDraft) -> bool {
        match self.members.iter_mut().find(|member| member.id == id) {
            Some(member) => {
                member.apply_draft(draft);
                debug!("Replaced fields of member {id}");
                true
            }
            None => false,
        }
    }

    fn allocate_id(&mut self) -> MemberId {
        let id = MemberId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}
