//! Running score and differential tracker.
//!
//! For each kick, the team's own goal tally strictly before the kick and
//! the differential against the opponent's tally at the same chronological
//! instant. The first kicker of a round sees the opponent's previous-round
//! total; the second kicker sees the opponent's current-round total.

use crate::rules::clinch::Role;

/// Score state at the instant one kick is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningState {
    /// Own goals scored strictly before this kick.
    pub score: u32,
    /// `score` minus the opponent's tally at the same instant.
    pub dif: i32,
}

/// Derives the running score state for every kick of one team.
///
/// Single pass with incremental accumulators; opponent prefixes clamp to the
/// kicks actually on record.
pub fn running_scores(own: &[bool], opp: &[bool], role: Role) -> Vec<RunningState> {
    let mut states = Vec::with_capacity(own.len());

    let mut own_before: u32 = 0;
    let mut opp_score: u32 = 0;
    let mut opp_seen: usize = 0;

    for (idx, &scored) in own.iter().enumerate() {
        let k = idx + 1;

        let opp_target = role.opp_kicks_before(k).min(opp.len());
        while opp_seen < opp_target {
            if opp[opp_seen] {
                opp_score += 1;
            }
            opp_seen += 1;
        }

        states.push(RunningState {
            score: own_before,
            dif: own_before as i32 - opp_score as i32,
        });

        if scored {
            own_before += 1;
        }
    }

    states
}
