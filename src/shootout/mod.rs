//! Shootout record types and match partitioning.
//!
//! Contains the raw and enriched kick records plus the logic that groups a
//! kick table into per-match, per-team ordered sequences.

pub mod kick;
pub mod partition;

pub use kick::{EnrichedKick, Kick};
pub use partition::{group_by_match, validate_outcome_flags, MatchGroup, TeamKicks};
