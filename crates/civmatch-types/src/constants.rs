//! System-wide constants for civmatch.

/// Highest score a compatibility function is expected to return.
pub const MAX_COMPATIBILITY_SCORE: i32 = 10;

/// Scores at or below this value never produce an edge.
pub const NO_EDGE_SCORE: i32 = 0;

/// Resource kind used by housing: how many residents a dwelling can take.
pub const OCCUPANCY_KIND: &str = "occupancy";

/// Default matchmaking domain label.
pub const DEFAULT_DOMAIN: &str = OCCUPANCY_KIND;

/// Domain separator mixed into every match root hash.
pub const MATCH_ROOT_DOMAIN: &[u8] = b"civmatch:match_root:v1:";

