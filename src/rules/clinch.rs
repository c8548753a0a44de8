//! Could-win / must-survive rule engine.
//!
//! Best-of-five with sudden death: each team has a quota of five regulation
//! kicks, then one kick per team per round until a round ends uneven. A kick
//! "could win" when converting it puts the team ahead of everything the
//! opponent can still reach, and "must survive" when missing it leaves the
//! opponent's current total out of reach even if every remaining own kick is
//! converted.
//!
//! The first and second kicker of a round see different opponent state: the
//! second kicker already knows the first kicker's result for the round. One
//! function handles both sides, parameterized by [`Role`].

use thiserror::Error;

/// Regulation quota per team.
pub const REGULATION_KICKS: usize = 5;

/// Which side of the round a team kicks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Kicks before the opponent in every round.
    First,
    /// Kicks after the opponent in every round.
    Second,
}

impl Role {
    /// Number of opponent kicks already taken when this team takes its k-th
    /// kick: the first kicker sees k-1 opponent kicks, the second sees k.
    pub(crate) fn opp_kicks_before(self, k: usize) -> usize {
        match self {
            Role::First => k - 1,
            Role::Second => k,
        }
    }
}

/// Clinch flags for a single kick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KickFlags {
    pub could_win: bool,
    pub must_survive: bool,
}

/// Errors from clinch derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClinchError {
    /// The second kicker has a sudden-death kick on record but the first
    /// kicker's kick for that round is missing. The round result cannot be
    /// read, so the sequence is malformed.
    #[error("second kicker has a sudden-death kick in round {round} with no opposing kick on record")]
    MissingOpponentKick { round: usize },
}

/// Derives the could-win / must-survive flags for every kick of one team.
///
/// `own` and `opp` are the chronological goal sequences of the team and its
/// opponent. Opponent prefix sums clamp to the kicks actually on record, so
/// sequences cut short by an early clinch evaluate cleanly.
pub fn clinch_flags(own: &[bool], opp: &[bool], role: Role) -> Result<Vec<KickFlags>, ClinchError> {
    let mut flags = Vec::with_capacity(own.len());

    // Running accumulators instead of re-summing prefixes per kick.
    let mut own_before: u32 = 0;
    let mut opp_score: u32 = 0;
    let mut opp_seen: usize = 0;

    for (idx, &scored) in own.iter().enumerate() {
        let k = idx + 1;

        // Advance the opponent accumulator to the chronological point of
        // this kick, clamped to the opponent's recorded kicks.
        let opp_target = role.opp_kicks_before(k).min(opp.len());
        while opp_seen < opp_target {
            if opp[opp_seen] {
                opp_score += 1;
            }
            opp_seen += 1;
        }

        let f = if k <= REGULATION_KICKS {
            regulation_flags(role, k, own_before, opp_score)
        } else {
            sudden_death_flags(role, k, opp)?
        };
        flags.push(f);

        if scored {
            own_before += 1;
        }
    }

    Ok(flags)
}

fn regulation_flags(role: Role, k: usize, own_before: u32, opp_score: u32) -> KickFlags {
    let own_remaining = (REGULATION_KICKS - k + 1) as u32;
    // Remaining opponent regulation kicks after this point: the first
    // kicker's opponent still has its k-th kick to take, the second
    // kicker's opponent does not.
    let opp_remaining = match role {
        Role::First => own_remaining,
        Role::Second => own_remaining - 1,
    };

    KickFlags {
        could_win: own_before + 1 > opp_score + opp_remaining,
        must_survive: own_before + own_remaining == opp_score,
    }
}

fn sudden_death_flags(role: Role, k: usize, opp: &[bool]) -> Result<KickFlags, ClinchError> {
    match role {
        // The first kicker can neither clinch nor be eliminated by its own
        // sudden-death kick: the second kicker still responds.
        Role::First => Ok(KickFlags {
            could_win: false,
            must_survive: false,
        }),
        // The second kicker's round is decided by the first kicker's result:
        // score after an opposing miss to win, score after an opposing goal
        // to stay alive.
        Role::Second => {
            let opp_scored = *opp
                .get(k - 1)
                .ok_or(ClinchError::MissingOpponentKick { round: k })?;
            Ok(KickFlags {
                could_win: !opp_scored,
                must_survive: opp_scored,
            })
        }
    }
}
