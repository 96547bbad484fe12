//! Roster state ownership and persistence orchestration.
//!
//! # Responsibility
//! - Define the single source-of-truth store for the member list.
//! - Keep serialization and fallback policy out of callers.
//!
//! # Invariants
//! - Every successful mutation persists the roster before returning.
//! - Member IDs stay unique within one store.

pub mod roster_store;
