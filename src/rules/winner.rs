//! Final-winner determination.
//!
//! The winner is the team with the strictly higher goal total over all its
//! taken kicks. A level total means the data is malformed or truncated
//! (sudden death continues until a decider), so it is a hard error rather
//! than a guessed winner.

use thiserror::Error;

/// The winning side of a shootout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
}

/// Errors from winner determination.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WinnerError {
    #[error("shootout level at {goals}-{goals} with no further kicks on record")]
    Tied { goals: u32 },
}

/// Determines the winner from the two goal sequences.
pub fn match_winner(first: &[bool], second: &[bool]) -> Result<Winner, WinnerError> {
    let first_goals = count(first);
    let second_goals = count(second);

    if first_goals > second_goals {
        Ok(Winner::First)
    } else if second_goals > first_goals {
        Ok(Winner::Second)
    } else {
        Err(WinnerError::Tied { goals: first_goals })
    }
}

fn count(goals: &[bool]) -> u32 {
    goals.iter().filter(|g| **g).count() as u32
}
