//! Member view-model: like counter and edit buffers.
//!
//! # Responsibility
//! - Track per-member transient state (likes, edited name/skill).
//! - Reset that state whenever the underlying record identity changes.
//!
//! # Invariants
//! - `likes` never goes below zero; reset returns it to exactly zero.
//! - Edit buffers are seeded from the record and never written back to
//!   the store implicitly; committing goes through `RosterStore::update`.

use crate::model::member::{Member, MemberId};

/// Like count at which a member's indicator flips to popular.
pub const POPULAR_LIKES_THRESHOLD: u32 = 5;

/// Binary highlight state derived from the like counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    /// `likes >= POPULAR_LIKES_THRESHOLD`.
    Popular,
    Normal,
}

/// Transient state scoped to one displayed member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberViewModel {
    member_id: MemberId,
    /// Locally edited name, visually live but not persisted.
    pub edited_name: String,
    /// Locally edited skill, visually live but not persisted.
    pub edited_skill: String,
    likes: u32,
}

impl MemberViewModel {
    /// Seeds view state from a member record at first display.
    pub fn new(member: &Member) -> Self {
        Self {
            member_id: member.id,
            edited_name: member.name.clone(),
            edited_skill: member.skill.clone(),
            likes: 0,
        }
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    /// Re-synchronizes with the record currently displayed in this slot.
    ///
    /// Same identity keeps all local state untouched; a different record
    /// reseeds buffers and drops the like count, as a freshly mounted
    /// view would.
    pub fn refresh(&mut self, member: &Member) {
        if self.member_id == member.id {
            return;
        }
        *self = Self::new(member);
    }

    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    pub fn reset_likes(&mut self) {
        self.likes = 0;
    }

    pub fn status(&self) -> MemberStatus {
        if self.likes >= POPULAR_LIKES_THRESHOLD {
            MemberStatus::Popular
        } else {
            MemberStatus::Normal
        }
    }

    /// Snapshot of the edit buffers as a member record.
    ///
    /// Callers commit an edit by passing this through
    /// `RosterStore::update`; until then the buffers are cosmetic.
    pub fn edited_member(&self) -> Member {
        Member::new(self.member_id, self.edited_name.clone(), self.edited_skill.clone())
    }
}
