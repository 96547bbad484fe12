//! Member domain model.
//!
//! # Responsibility
//! - Define the member record persisted in the roster list.
//! - Provide field validation shared by every write path.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a member and never reused within
//!   one roster.
//! - A member that passes `validate()` has a non-blank name and skill.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a roster member.
///
/// Derived from the creation time in epoch milliseconds, bumped by the
/// store when needed to stay unique. Kept as a type alias to make semantic
/// intent explicit in signatures.
pub type MemberId = i64;

/// Validation failure for member field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberValidationError {
    /// Name is empty or whitespace-only after trimming.
    EmptyName,
    /// Skill is empty or whitespace-only after trimming.
    EmptySkill,
}

impl Display for MemberValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "member name cannot be empty"),
            Self::EmptySkill => write!(f, "member skill cannot be empty"),
        }
    }
}

impl Error for MemberValidationError {}

/// One roster entry: identity plus display name and skill label.
///
/// Serialized field names match the persisted `teamList` JSON shape, so a
/// roster written by earlier versions of the app loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable ID used for removal, update and view-model identity checks.
    pub id: MemberId,
    /// Display name, freely editable after creation.
    pub name: String,
    /// Skill label, freely editable after creation.
    pub skill: String,
}

impl Member {
    /// Creates a member with a caller-provided stable ID.
    ///
    /// Used by the store's add path and by import-style callers where
    /// identity already exists. Does not validate field content.
    pub fn new(id: MemberId, name: impl Into<String>, skill: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            skill: skill.into(),
        }
    }

    /// Checks that name and skill are non-blank.
    ///
    /// # Errors
    /// - `EmptyName` when the trimmed name is empty.
    /// - `EmptySkill` when the trimmed skill is empty.
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }
        if self.skill.trim().is_empty() {
            return Err(MemberValidationError::EmptySkill);
        }
        Ok(())
    }
}

/// Fallback roster used when no persisted state exists or it fails to
/// parse. Kept as one named constant so the load call site stays free of
/// inline literals.
pub fn default_seed() -> Vec<Member> {
    vec![
        Member::new(1, "Adesola", "Node.js Explorer"),
        Member::new(2, "Gemini", "React Guide"),
        Member::new(3, "Luna", "CSS Stylist"),
    ]
}
