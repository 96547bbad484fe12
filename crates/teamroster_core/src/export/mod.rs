//! Roster export entry points.
//!
//! # Responsibility
//! - Produce downloadable representations of the roster.
//! - Keep byte-format details out of the store layer.

pub mod csv;
