//! Match partitioning and outcome-flag validation.
//!
//! Groups a kick table by match id (stable, first-appearance order) and
//! splits each match into the first-kicking and second-kicking team
//! sequences, ordered by `shot_order`. Kicks with no recorded outcome are
//! filtered out here, before any derivation runs.

use rustc_hash::FxHashMap;

use crate::shootout::kick::Kick;

/// One team's taken kicks within a match, in kicking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamKicks {
    /// Index of each kick in the original input slice.
    pub rows: Vec<usize>,
    /// Goal outcome of each kick, parallel to `rows`.
    pub goals: Vec<bool>,
}

impl TeamKicks {
    fn from_entries(mut entries: Vec<(usize, &Kick)>) -> TeamKicks {
        // Stable sort: equal shot_order values keep input order.
        entries.sort_by_key(|(_, k)| k.shot_order);
        TeamKicks {
            rows: entries.iter().map(|(row, _)| *row).collect(),
            goals: entries.iter().map(|(_, k)| k.scored()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All taken kicks of one match, split by kicking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub match_id: String,
    /// Kicks of the team that kicked first (`take_first` true).
    pub first: TeamKicks,
    /// Kicks of the team that kicked second.
    pub second: TeamKicks,
}

/// Returns the input row indices of kicks whose outcome flags are
/// inconsistent: some flag is recorded, but the number of flags set true is
/// not exactly one.
///
/// This is diagnostic only; the caller reports the rows and continues.
pub fn validate_outcome_flags(kicks: &[Kick]) -> Vec<usize> {
    kicks
        .iter()
        .enumerate()
        .filter(|(_, k)| k.has_outcome_record() && k.outcome_flag_count() != 1)
        .map(|(row, _)| row)
        .collect()
}

/// Groups kicks by match id, preserving first-appearance order of matches,
/// and splits each match into per-team sequences ordered by `shot_order`.
///
/// Kicks with no recorded `goal` are dropped; they contribute no output row.
pub fn group_by_match(kicks: &[Kick]) -> Vec<MatchGroup> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(String, Vec<(usize, &Kick)>, Vec<(usize, &Kick)>)> = Vec::new();

    for (row, kick) in kicks.iter().enumerate() {
        if !kick.is_taken() {
            continue;
        }
        let slot = *index.entry(kick.match_id.as_str()).or_insert_with(|| {
            groups.push((kick.match_id.clone(), Vec::new(), Vec::new()));
            groups.len() - 1
        });
        if kick.take_first {
            groups[slot].1.push((row, kick));
        } else {
            groups[slot].2.push((row, kick));
        }
    }

    groups
        .into_iter()
        .map(|(match_id, first, second)| MatchGroup {
            match_id,
            first: TeamKicks::from_entries(first),
            second: TeamKicks::from_entries(second),
        })
        .collect()
}
