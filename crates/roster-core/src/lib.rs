pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::member::Member;
pub use models::member_draft::MemberDraft;
pub use models::member_field::MemberField;
pub use models::member_id::MemberId;
