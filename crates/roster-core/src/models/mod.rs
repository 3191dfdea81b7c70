pub mod member;
pub mod member_draft;
pub mod member_field;
pub mod member_id;
