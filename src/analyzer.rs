//! Per-match analysis orchestration.
//!
//! Validates outcome flags, partitions the kick table into match groups,
//! runs the rule derivations over each group, and reassembles the enriched
//! rows preserving the original kick order within each match. Matches are
//! independent, so groups run through rayon; results are collected in group
//! order, keeping the output identical to a sequential fold.

use log::warn;
use rayon::prelude::*;
use thiserror::Error;

use crate::rules::clinch::{clinch_flags, ClinchError, Role};
use crate::rules::score::running_scores;
use crate::rules::winner::{match_winner, Winner, WinnerError};
use crate::shootout::kick::{EnrichedKick, Kick};
use crate::shootout::partition::{group_by_match, validate_outcome_flags, MatchGroup, TeamKicks};

/// Errors from analyzing a kick table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("match '{match_id}': {source}")]
    Clinch {
        match_id: String,
        #[source]
        source: ClinchError,
    },

    #[error("match '{match_id}': {source}")]
    Winner {
        match_id: String,
        #[source]
        source: WinnerError,
    },
}

/// Analyzes a full kick table: one enriched row per taken kick, matches in
/// first-appearance order, rows within a match in original input order.
pub fn analyze(kicks: &[Kick]) -> Result<Vec<EnrichedKick>, AnalyzeError> {
    for row in validate_outcome_flags(kicks) {
        let k = &kicks[row];
        warn!(
            "row {}: match '{}' shot {} does not have exactly one of goal/missed/saved set",
            row + 1,
            k.match_id,
            k.shot_order
        );
    }

    let groups = group_by_match(kicks);
    let per_match: Vec<Vec<EnrichedKick>> = groups
        .par_iter()
        .map(|group| analyze_match(kicks, group))
        .collect::<Result<_, _>>()?;

    Ok(per_match.into_iter().flatten().collect())
}

/// Runs all derivations for one match and returns its enriched rows in
/// original input order.
fn analyze_match(kicks: &[Kick], group: &MatchGroup) -> Result<Vec<EnrichedKick>, AnalyzeError> {
    let first = &group.first.goals;
    let second = &group.second.goals;

    let winner = match_winner(first, second).map_err(|source| AnalyzeError::Winner {
        match_id: group.match_id.clone(),
        source,
    })?;

    let mut rows = Vec::with_capacity(group.first.len() + group.second.len());
    enrich_team(kicks, &group.first, first, second, Role::First, winner, &mut rows)
        .map_err(|source| AnalyzeError::Clinch {
            match_id: group.match_id.clone(),
            source,
        })?;
    enrich_team(kicks, &group.second, second, first, Role::Second, winner, &mut rows)
        .map_err(|source| AnalyzeError::Clinch {
            match_id: group.match_id.clone(),
            source,
        })?;

    rows.sort_by_key(|(row, _)| *row);
    Ok(rows.into_iter().map(|(_, enriched)| enriched).collect())
}

fn enrich_team(
    kicks: &[Kick],
    team: &TeamKicks,
    own: &[bool],
    opp: &[bool],
    role: Role,
    winner: Winner,
    rows: &mut Vec<(usize, EnrichedKick)>,
) -> Result<(), ClinchError> {
    let flags = clinch_flags(own, opp, role)?;
    let states = running_scores(own, opp, role);
    let won = matches!(
        (role, winner),
        (Role::First, Winner::First) | (Role::Second, Winner::Second)
    );

    for (i, &row) in team.rows.iter().enumerate() {
        let kick = kicks[row].clone();
        rows.push((
            row,
            EnrichedKick {
                sudden_death: kick.shot_order > 5,
                could_win: flags[i].could_win,
                must_survive: flags[i].must_survive,
                running_score: states[i].score,
                running_dif: states[i].dif,
                match_winner: won,
                kick,
            },
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kick(match_id: &str, shot_order: u32, take_first: bool, goal: bool) -> Kick {
        Kick {
            match_id: match_id.to_string(),
            matchup: None,
            shot_order,
            take_first,
            goal: Some(goal),
            missed: Some(!goal),
            saved: Some(false),
        }
    }

    fn untaken(match_id: &str, shot_order: u32, take_first: bool) -> Kick {
        Kick {
            match_id: match_id.to_string(),
            matchup: None,
            shot_order,
            take_first,
            goal: None,
            missed: None,
            saved: None,
        }
    }

    /// Chronological 4-2 regulation win for the first kicker, decided on its
    /// fifth kick.
    fn decided_in_regulation() -> Vec<Kick> {
        let first = [true, true, false, true, true];
        let second = [true, false, true, false];
        let mut kicks = Vec::new();
        for round in 0..5 {
            kicks.push(kick("m", round as u32 + 1, true, first[round]));
            if round < second.len() {
                kicks.push(kick("m", round as u32 + 1, false, second[round]));
            }
        }
        kicks
    }

    #[test]
    fn enriched_rows_preserve_chronological_order() {
        let kicks = decided_in_regulation();
        let rows = analyze(&kicks).unwrap();
        assert_eq!(rows.len(), 9);
        for (enriched, original) in rows.iter().zip(kicks.iter()) {
            assert_eq!(&enriched.kick, original);
        }
    }

    #[test]
    fn clincher_kick_carries_could_win() {
        let rows = analyze(&decided_in_regulation()).unwrap();
        // The first team's fifth kick is row 8 chronologically.
        let clincher = &rows[8];
        assert!(clincher.kick.take_first);
        assert_eq!(clincher.kick.shot_order, 5);
        assert!(clincher.could_win);
        assert!(clincher.kick.scored());
        assert!(clincher.match_winner);
    }

    #[test]
    fn winner_is_uniform_per_team() {
        let rows = analyze(&decided_in_regulation()).unwrap();
        for row in &rows {
            assert_eq!(row.match_winner, row.kick.take_first);
        }
    }

    #[test]
    fn untaken_kicks_produce_no_rows() {
        let mut kicks = decided_in_regulation();
        kicks.insert(3, untaken("m", 2, false));
        let rows = analyze(&kicks).unwrap();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| r.kick.is_taken()));
    }

    #[test]
    fn matches_are_independent_and_keep_input_order() {
        let mut kicks = Vec::new();
        // Two interleaved matches with opposite winners.
        kicks.push(kick("b", 1, true, true));
        kicks.push(kick("a", 1, true, false));
        kicks.push(kick("b", 1, false, false));
        kicks.push(kick("a", 1, false, true));

        let rows = analyze(&kicks).unwrap();
        assert_eq!(rows.len(), 4);
        // Groups in first-appearance order: all of "b", then all of "a".
        assert_eq!(rows[0].kick.match_id, "b");
        assert_eq!(rows[1].kick.match_id, "b");
        assert_eq!(rows[2].kick.match_id, "a");
        assert_eq!(rows[3].kick.match_id, "a");
        assert!(rows[0].match_winner);
        assert!(!rows[1].match_winner);
        assert!(!rows[2].match_winner);
        assert!(rows[3].match_winner);
    }

    #[test]
    fn tied_match_is_fatal_with_match_id() {
        let kicks = vec![kick("m", 1, true, true), kick("m", 1, false, true)];
        let err = analyze(&kicks).unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::Winner {
                match_id: "m".to_string(),
                source: WinnerError::Tied { goals: 1 },
            }
        );
    }

    #[test]
    fn sudden_death_desync_is_fatal() {
        // Five level rounds, then a second-team kick with no opposing kick
        // in round six.
        let mut kicks = Vec::new();
        for round in 1..=5u32 {
            kicks.push(kick("m", round, true, round % 2 == 0));
            kicks.push(kick("m", round, false, round % 2 == 0));
        }
        kicks.push(kick("m", 6, false, true));

        let err = analyze(&kicks).unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::Clinch {
                match_id: "m".to_string(),
                source: ClinchError::MissingOpponentKick { round: 6 },
            }
        );
    }

    #[test]
    fn running_score_rederives_from_goal_column() {
        let rows = analyze(&decided_in_regulation()).unwrap();
        for team in [true, false] {
            let mut sum = 0;
            for row in rows.iter().filter(|r| r.kick.take_first == team) {
                assert_eq!(row.running_score, sum);
                if row.kick.scored() {
                    sum += 1;
                }
            }
        }
    }
}
