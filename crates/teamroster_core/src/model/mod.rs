//! Roster domain model.
//!
//! # Responsibility
//! - Define the canonical member record managed by the roster store.
//! - Provide the default seed roster used when no persisted state exists.
//!
//! # Invariants
//! - Every member is identified by a `MemberId` unique within one roster.
//! - Validation is the only gate on name/skill content; both must be
//!   non-empty after trimming.

pub mod member;
