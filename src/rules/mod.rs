//! Shootout rule derivations.
//!
//! Computes the per-kick clinch flags (could-win / must-survive), the
//! running score and differential, and the final match winner from the two
//! ordered per-team outcome sequences.

pub mod clinch;
pub mod score;
pub mod winner;

pub use clinch::{clinch_flags, ClinchError, KickFlags, Role, REGULATION_KICKS};
pub use score::{running_scores, RunningState};
pub use winner::{match_winner, Winner, WinnerError};
