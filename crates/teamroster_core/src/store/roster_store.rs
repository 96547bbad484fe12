//! Roster store: the owned source of truth for the member list.
//!
//! # Responsibility
//! - Own the ordered member list and all add/remove/update paths.
//! - Synchronize every mutation with the key-value backend.
//!
//! # Invariants
//! - Write paths validate member fields before mutating state.
//! - IDs generated by `add` are unique within the store and non-decreasing.
//! - A load that cannot produce a parsed roster falls back to the named
//!   seed without surfacing an error.

use crate::kv::{KeyValueStore, KvError};
use crate::model::member::{default_seed, Member, MemberId, MemberValidationError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Storage key holding the JSON-serialized roster array.
pub const STORE_KEY: &str = "teamList";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for roster mutations and persistence synchronization.
#[derive(Debug)]
pub enum StoreError {
    Validation(MemberValidationError),
    Kv(KvError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Kv(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Kv(err) => Some(err),
        }
    }
}

impl From<MemberValidationError> for StoreError {
    fn from(value: MemberValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// Owned roster state backed by an opaque key-value store.
///
/// The store reads persisted state once at construction and writes the
/// full serialized roster back after every successful mutation. Callers
/// hold the store as a single process-local value; there is no interior
/// sharing.
pub struct RosterStore<S: KeyValueStore> {
    members: Vec<Member>,
    kv: S,
}

impl<S: KeyValueStore> RosterStore<S> {
    /// Loads the roster from the backend, falling back to the seed.
    ///
    /// Missing or unparseable persisted state is not an error: the store
    /// starts from [`default_seed`] and only logs the condition. Backend
    /// read failures still propagate, since they signal a broken
    /// collaborator rather than absent data.
    pub fn load(kv: S) -> StoreResult<Self> {
        let members = match kv.get(STORE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Member>>(&raw) {
                Ok(members) => {
                    info!(
                        "event=roster_load module=store status=ok source=persisted count={}",
                        members.len()
                    );
                    members
                }
                Err(err) => {
                    warn!(
                        "event=roster_load module=store status=fallback reason=parse_error error={err}"
                    );
                    default_seed()
                }
            },
            None => {
                info!("event=roster_load module=store status=fallback reason=no_persisted_state");
                default_seed()
            }
        };

        Ok(Self { members, kv })
    }

    /// Ordered view of the current roster.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Appends a new member and persists the roster.
    ///
    /// Name and skill are trimmed before storage. Returns the generated ID.
    ///
    /// # Errors
    /// - `Validation` when either field is blank; the roster is unchanged.
    /// - `Kv` when the persistence write fails.
    pub fn add(&mut self, name: &str, skill: &str) -> StoreResult<MemberId> {
        let member = Member::new(self.next_id(), name.trim(), skill.trim());
        member.validate()?;

        let id = member.id;
        self.members.push(member);
        self.save()?;
        info!("event=roster_add module=store status=ok id={id} count={}", self.members.len());
        Ok(id)
    }

    /// Removes the member with `id` and persists the roster.
    ///
    /// Returns `Ok(true)` when a member was removed, `Ok(false)` when the
    /// ID was absent. Absent IDs are a no-op and skip the persistence
    /// write.
    pub fn remove(&mut self, id: MemberId) -> StoreResult<bool> {
        let before = self.members.len();
        self.members.retain(|member| member.id != id);
        if self.members.len() == before {
            info!("event=roster_remove module=store status=noop id={id}");
            return Ok(false);
        }

        self.save()?;
        info!("event=roster_remove module=store status=ok id={id} count={}", self.members.len());
        Ok(true)
    }

    /// Rewrites name and skill of the member with `id` and persists.
    ///
    /// Returns `Ok(false)` without writing when the ID is absent.
    ///
    /// # Errors
    /// - `Validation` when either replacement field is blank.
    /// - `Kv` when the persistence write fails.
    pub fn update(&mut self, id: MemberId, name: &str, skill: &str) -> StoreResult<bool> {
        let candidate = Member::new(id, name.trim(), skill.trim());
        candidate.validate()?;

        let Some(member) = self.members.iter_mut().find(|member| member.id == id) else {
            info!("event=roster_update module=store status=noop id={id}");
            return Ok(false);
        };

        member.name = candidate.name;
        member.skill = candidate.skill;
        self.save()?;
        info!("event=roster_update module=store status=ok id={id}");
        Ok(true)
    }

    /// Serializes the roster and writes it under [`STORE_KEY`].
    fn save(&mut self) -> StoreResult<()> {
        // Vec<Member> serialization cannot fail; keep the path panic-free
        // anyway and degrade to an empty array.
        let raw = serde_json::to_string(&self.members).unwrap_or_else(|_| "[]".to_string());
        self.kv.set(STORE_KEY, &raw)?;
        Ok(())
    }

    /// Next unique member ID: creation time in epoch milliseconds, bumped
    /// past the current maximum so rapid consecutive adds stay unique.
    fn next_id(&self) -> MemberId {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0);
        let max_id = self.members.iter().map(|member| member.id).max().unwrap_or(0);
        now_ms.max(max_id + 1)
    }

    /// Consumes the store and returns the backend, for callers that need
    /// to hand the connection elsewhere after a session.
    pub fn into_backend(self) -> S {
        self.kv
    }
}
