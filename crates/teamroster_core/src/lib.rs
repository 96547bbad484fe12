//! Core domain logic for the team roster manager.
//! This crate is the single source of truth for roster invariants.

pub mod export;
pub mod kv;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;
pub mod view;

pub use export::csv::{export_csv, write_csv, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use kv::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::member::{default_seed, Member, MemberId, MemberValidationError};
pub use search::filter::filter_members;
pub use store::roster_store::{RosterStore, StoreError, StoreResult, STORE_KEY};
pub use view::member_view::{MemberStatus, MemberViewModel, POPULAR_LIKES_THRESHOLD};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
