//! Roster filtering entry points.
//!
//! # Responsibility
//! - Expose the search-term view derivation over the member list.
//! - Keep match semantics in one place for UI and CLI callers.

pub mod filter;
