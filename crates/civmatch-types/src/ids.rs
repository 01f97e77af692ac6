//! Identifiers used throughout civmatch.
//!
//! Participant IDs use UUIDv7 so that log lines sort by creation time.
//! Ticks are plain monotonically increasing counters.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ParticipantId
// ---------------------------------------------------------------------------

/// Identity of a matchmaking participant (a household, a building, a job
/// site...). This is the only thing about a participant that outlives a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "participant:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TickId
// ---------------------------------------------------------------------------

/// Counter of completed match runs for one matchmaker.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct TickId(pub u64);

impl TickId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick:{}", self.0)
    }
}
