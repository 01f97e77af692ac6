//! # civmatch-matchcore
//!
//! **Per-tick resource matchmaking for the city simulation.**
//!
//! Participants post offers (supply) and requests (demand) during their
//! update; once per tick the owning context calls
//! [`Matchmaker::run_match`], which pairs them by solving a weighted
//! bipartite matching and confirms every pair to both sides.
//!
//! - **Local search**: greedy warm start, then augmenting alternating paths
//!   until no single path improves the total weight
//! - **Always valid**: no offer or request is ever matched twice
//! - **Tick-scoped**: the graph is rebuilt every run and unmatched entries
//!   are discarded
//! - **Replayable**: every run reports a match root over its pairs

pub mod determinism;
pub mod edge;
pub mod graph;
pub mod matchmaker;
pub mod path;
pub mod report;

pub use determinism::{compute_match_root, verify_match_root};
pub use edge::{Edge, EdgeFlag, EdgeIndex, Side};
pub use graph::MatchmakingGraph;
pub use matchmaker::{Matchmaker, ResourceMatchmaker, SessionPhase};
pub use path::AlternatingPath;
pub use report::{MatchReport, MatchedPair};
