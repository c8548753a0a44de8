//! Synthetic shootout generation.
//!
//! Plays shootouts forward kick by kick to produce realistic input tables
//! for fixtures, property tests, and benchmarks. Regulation stops early
//! once a lead is unassailable and sudden-death rounds run until a round
//! ends uneven, so every generated match has a strict winner and the same
//! shape as real data.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::rules::clinch::REGULATION_KICKS;
use crate::shootout::kick::Kick;

/// Configuration for synthetic shootout generation.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Number of matches to generate.
    pub matches: usize,
    /// Conversion probability per kick.
    pub goal_prob: f64,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            matches: 10,
            goal_prob: 0.75,
            seed: 0,
        }
    }
}

/// Generates kick records for `config.matches` complete shootouts, in
/// chronological order within each match.
pub fn generate(config: &SynthConfig) -> Vec<Kick> {
    let mut rng = match config.seed {
        0 => SmallRng::from_entropy(),
        seed => SmallRng::seed_from_u64(seed),
    };

    let mut kicks = Vec::new();
    for m in 0..config.matches {
        let match_id = format!("synth_{:03}", m + 1);
        play_match(&match_id, config.goal_prob, &mut rng, &mut kicks);
    }
    kicks
}

/// Plays one shootout forward, appending its kicks in order.
fn play_match(match_id: &str, goal_prob: f64, rng: &mut SmallRng, kicks: &mut Vec<Kick>) {
    let mut first_score = 0u32;
    let mut second_score = 0u32;
    let mut first_taken = 0u32;
    let mut second_taken = 0u32;

    let decided = |fs: u32, ss: u32, ft: u32, st: u32| {
        let f_remaining = REGULATION_KICKS as u32 - ft;
        let s_remaining = REGULATION_KICKS as u32 - st;
        fs > ss + s_remaining || ss > fs + f_remaining
    };

    // Regulation: five rounds, stopping as soon as the outcome is locked.
    for round in 1..=REGULATION_KICKS as u32 {
        if decided(first_score, second_score, first_taken, second_taken) {
            return;
        }
        if take_kick(match_id, round, true, goal_prob, rng, kicks) {
            first_score += 1;
        }
        first_taken += 1;

        if decided(first_score, second_score, first_taken, second_taken) {
            return;
        }
        if take_kick(match_id, round, false, goal_prob, rng, kicks) {
            second_score += 1;
        }
        second_taken += 1;
    }

    if first_score != second_score {
        return;
    }

    // Sudden death: one kick each per round until a round ends uneven.
    let mut round = REGULATION_KICKS as u32;
    loop {
        round += 1;
        let first_scored = take_kick(match_id, round, true, goal_prob, rng, kicks);
        let second_scored = take_kick(match_id, round, false, goal_prob, rng, kicks);
        if first_scored != second_scored {
            return;
        }
    }
}

/// Rolls one kick, records it, and returns whether it was converted. A
/// non-goal is attributed to a miss or a save at even odds.
fn take_kick(
    match_id: &str,
    round: u32,
    take_first: bool,
    goal_prob: f64,
    rng: &mut SmallRng,
    kicks: &mut Vec<Kick>,
) -> bool {
    let scored = rng.gen_bool(goal_prob);
    let saved = !scored && rng.gen_bool(0.5);
    kicks.push(Kick {
        match_id: match_id.to_string(),
        matchup: None,
        shot_order: round,
        take_first,
        goal: Some(scored),
        missed: Some(!scored && !saved),
        saved: Some(saved),
    });
    scored
}
