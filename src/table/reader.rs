//! Kick table reading.
//!
//! Deserializes the input CSV into [`Kick`] records. The outcome flag
//! columns come from a NaN-able numeric export, so `1`/`0`, `1.0`/`0.0`,
//! `true`/`false`, `nan`, and empty cells are all accepted. A missing or
//! empty `match` cell is fatal: without the grouping key the row cannot be
//! partitioned.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use thiserror::Error;

use crate::shootout::kick::Kick;

/// Errors from reading the kick table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: {source}")]
    Record {
        /// 1-based data row number (header excluded).
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: empty match id")]
    MissingMatchId { row: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Raw row shape as deserialized from the CSV, before field checks.
#[derive(Debug, Deserialize)]
struct RawKick {
    #[serde(rename = "match")]
    match_id: String,
    #[serde(default)]
    matchup: Option<String>,
    shot_order: u32,
    #[serde(deserialize_with = "de_required_flag")]
    take_first: bool,
    #[serde(deserialize_with = "de_flag")]
    goal: Option<bool>,
    #[serde(deserialize_with = "de_flag")]
    missed: Option<bool>,
    #[serde(deserialize_with = "de_flag")]
    saved: Option<bool>,
}

/// Reads kick records from any CSV source with a header row.
pub fn read_kicks<R: Read>(rdr: R) -> Result<Vec<Kick>, TableError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);

    let mut kicks = Vec::new();
    for (idx, result) in reader.deserialize::<RawKick>().enumerate() {
        let row = idx + 1;
        let raw = result.map_err(|source| TableError::Record { row, source })?;
        if raw.match_id.trim().is_empty() {
            return Err(TableError::MissingMatchId { row });
        }
        kicks.push(Kick {
            match_id: raw.match_id,
            matchup: raw.matchup.filter(|m| !m.trim().is_empty()),
            shot_order: raw.shot_order,
            take_first: raw.take_first,
            goal: raw.goal,
            missed: raw.missed,
            saved: raw.saved,
        });
    }
    Ok(kicks)
}

/// Reads kick records from a file path.
pub fn read_kicks_from_path(path: &Path) -> Result<Vec<Kick>, TableError> {
    let file = File::open(path).map_err(|source| TableError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_kicks(file)
}

/// Parses one outcome-flag cell.
fn parse_flag(cell: &str) -> Result<Option<bool>, FlagParseError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    match cell.to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" => Ok(Some(true)),
        "0" | "0.0" | "false" => Ok(Some(false)),
        "nan" | "na" => Ok(None),
        _ => Err(FlagParseError(cell.to_string())),
    }
}

#[derive(Debug)]
struct FlagParseError(String);

impl fmt::Display for FlagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid flag value '{}', expected 1/0, true/false, or empty", self.0)
    }
}

fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let cell = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    parse_flag(&cell).map_err(DeError::custom)
}

fn de_required_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let cell = String::deserialize(deserializer)?;
    match parse_flag(&cell).map_err(DeError::custom)? {
        Some(v) => Ok(v),
        None => Err(DeError::custom("missing team flag, expected 1/0 or true/false")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "match,matchup,shot_order,take_first,goal,missed,saved";

    fn read(body: &str) -> Result<Vec<Kick>, TableError> {
        read_kicks(format!("{HEADER}\n{body}").as_bytes())
    }

    #[test]
    fn parses_numeric_and_boolean_flag_forms() {
        let kicks = read("m1,ARGvsGER,1,1,1.0,0.0,0\nm1,ARGvsGER,1,false,true,false,0").unwrap();
        assert_eq!(kicks[0].goal, Some(true));
        assert_eq!(kicks[0].missed, Some(false));
        assert!(kicks[0].take_first);
        assert_eq!(kicks[1].goal, Some(true));
        assert!(!kicks[1].take_first);
    }

    #[test]
    fn empty_and_nan_outcome_cells_are_unknown() {
        let kicks = read("m1,,6,1,,,\nm1,,6,0,nan,nan,nan").unwrap();
        assert_eq!(kicks[0].goal, None);
        assert!(!kicks[0].is_taken());
        assert_eq!(kicks[1].goal, None);
    }

    #[test]
    fn empty_matchup_becomes_none() {
        let kicks = read("m1,,1,1,1,0,0").unwrap();
        assert_eq!(kicks[0].matchup, None);
    }

    #[test]
    fn missing_matchup_column_is_accepted() {
        let body = "match,shot_order,take_first,goal,missed,saved\nm1,1,1,1,0,0";
        let kicks = read_kicks(body.as_bytes()).unwrap();
        assert_eq!(kicks[0].matchup, None);
        assert_eq!(kicks[0].match_id, "m1");
    }

    #[test]
    fn empty_match_id_is_fatal() {
        let err = read(",x,1,1,1,0,0").unwrap_err();
        assert!(matches!(err, TableError::MissingMatchId { row: 1 }));
    }

    #[test]
    fn bad_flag_value_is_fatal_with_row_number() {
        let err = read("m1,,1,1,maybe,0,0").unwrap_err();
        match err {
            TableError::Record { row, .. } => assert_eq!(row, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unparseable_take_first_is_fatal() {
        let err = read("m1,,1,,1,0,0").unwrap_err();
        assert!(matches!(err, TableError::Record { row: 1, .. }));
    }
}
