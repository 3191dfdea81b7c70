use crate::RosterStore;

use roster_core::{MemberDraft, MemberId};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

// =========================================================================
// Seeding
// =========================================================================

#[test]
fn given_seeded_store_when_members_then_sample_members_in_insertion_order() {
    // Given / When
    let store = RosterStore::seeded();

    // Then
    assert_that!(store.len(), eq(2));
    assert_that!(store.members()[0].id, eq(MemberId::new(1)));
    assert_that!(store.members()[0].first_name.as_str(), eq("Alice"));
    assert_that!(store.members()[1].id, eq(MemberId::new(2)));
    assert_that!(store.members()[1].last_name.as_str(), eq("Johnson"));
}

#[test]
fn given_seeded_store_when_append_then_id_continues_above_seeds() {
    // Given
    let mut store = RosterStore::seeded();

    // When
    let id = store.append(&MemberDraft::new("Cara", "Lee", "New"));

    // Then
    assert_that!(id, eq(MemberId::new(3)));
    assert_that!(store.len(), eq(3));
}

// =========================================================================
// Append / Replace
// =========================================================================

#[test]
fn given_empty_store_when_append_then_member_at_end_with_draft_fields() {
    // Given
    let mut store = RosterStore::new();

    // When
    let id = store.append(&MemberDraft::new("Alice", "Smith", "Bio"));

    // Then
    let member = store.find(id).unwrap();
    assert_that!(member.first_name.as_str(), eq("Alice"));
    assert_that!(member.last_name.as_str(), eq("Smith"));
    assert_that!(member.bio.as_str(), eq("Bio"));
}

#[test]
fn given_existing_member_when_replace_then_only_target_fields_change() {
    // Given
    let mut store = RosterStore::seeded();
    let untouched_before = store.members()[0].clone();

    // When
    let replaced = store.replace(MemberId::new(2), &MemberDraft::new("Bobby", "J", "Updated"));

    // Then
    assert_that!(replaced, eq(true));
    assert_that!(store.members()[1].id, eq(MemberId::new(2)));
    assert_that!(store.members()[1].first_name.as_str(), eq("Bobby"));
    assert_eq!(store.members()[0], untouched_before);
}

#[test]
fn given_missing_id_when_replace_then_false_and_store_unchanged() {
    // Given
    let mut store = RosterStore::seeded();
    let before = store.members().to_vec();

    // When
    let replaced = store.replace(MemberId::new(99), &MemberDraft::new("X", "Y", "Z"));

    // Then
    assert_that!(replaced, eq(false));
    assert_eq!(store.members(), &before[..]);
}

#[test]
fn given_replaced_member_when_members_then_position_unchanged() {
    // Given
    let mut store = RosterStore::seeded();

    // When
    store.replace(MemberId::new(1), &MemberDraft::new("Alicia", "Smith", "Bio"));

    // Then: still first in the sequence
    assert_that!(store.members()[0].id, eq(MemberId::new(1)));
    assert_that!(store.members()[0].first_name.as_str(), eq("Alicia"));
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn given_seeded_store_when_find_known_id_then_some() {
    let store = RosterStore::seeded();

    assert_that!(store.find(MemberId::new(2)).map(|m| m.id), some(eq(MemberId::new(2))));
    assert_that!(store.contains(MemberId::new(2)), eq(true));
}

#[test]
fn given_seeded_store_when_find_unknown_id_then_none() {
    let store = RosterStore::seeded();

    assert_that!(store.find(MemberId::new(99)), none());
    assert_that!(store.contains(MemberId::new(99)), eq(false));
}

#[test]
fn given_new_store_when_inspected_then_empty() {
    let store = RosterStore::new();

    assert_that!(store.is_empty(), eq(true));
    assert_that!(store.len(), eq(0));
}
