//! # civmatch-types
//!
//! Shared types, errors, and configuration for **civmatch**, the per-tick
//! resource matchmaker of the city simulation.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`TickId`]
//! - **Participant contract**: [`MatchmakingParticipant`], [`MatchOffer`], [`MatchRequest`], [`Participant`]
//! - **Resource model**: [`ResourceKind`], [`ResourceOffer`], [`ResourceRequest`]
//! - **Configuration**: [`MatchmakerConfig`], [`InitialMatching`]
//! - **Errors**: [`CivmatchError`] with `CM_ERR_` prefix codes
//! - **Constants**: scoring bounds and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod participant;
pub mod resource;

pub use config::*;
pub use error::*;
pub use ids::*;
pub use participant::*;
pub use resource::*;

// Constants are accessed via `civmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
