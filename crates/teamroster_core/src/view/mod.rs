//! Per-member presentation state.
//!
//! # Responsibility
//! - Hold transient UI-only state scoped to one member record.
//! - Keep view state out of the persisted roster.

pub mod member_view;
