//! Kick table writing.
//!
//! Writes the enriched output table in a fixed column order, with booleans
//! as `1`/`0` to match the upstream numeric style, plus the raw input
//! format used by the synthetic generator.

use std::io::Write;

use crate::shootout::kick::{EnrichedKick, Kick};
use crate::table::reader::TableError;

/// Output column order of the enriched table. `shot` is the 0-based output
/// row index.
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "shot",
    "match",
    "matchup",
    "shot_order",
    "take_first",
    "goal",
    "missed",
    "saved",
    "sudden_death",
    "could_win",
    "must_survive",
    "running_score",
    "running_dif",
    "match_winner",
];

/// Header of the raw input format.
const INPUT_COLUMNS: [&str; 7] = [
    "match",
    "matchup",
    "shot_order",
    "take_first",
    "goal",
    "missed",
    "saved",
];

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn opt_flag(value: Option<bool>) -> &'static str {
    match value {
        Some(v) => flag(v),
        None => "",
    }
}

/// Writes the enriched table with the fixed [`OUTPUT_COLUMNS`] order.
pub fn write_enriched<W: Write>(w: W, rows: &[EnrichedKick]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(OUTPUT_COLUMNS)?;

    for (shot, row) in rows.iter().enumerate() {
        let k = &row.kick;
        writer.write_record([
            shot.to_string().as_str(),
            k.match_id.as_str(),
            k.matchup.as_deref().unwrap_or(""),
            k.shot_order.to_string().as_str(),
            flag(k.take_first),
            opt_flag(k.goal),
            opt_flag(k.missed),
            opt_flag(k.saved),
            flag(row.sudden_death),
            flag(row.could_win),
            flag(row.must_survive),
            row.running_score.to_string().as_str(),
            row.running_dif.to_string().as_str(),
            flag(row.match_winner),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes raw kick records in the input format.
pub fn write_kicks<W: Write>(w: W, kicks: &[Kick]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(INPUT_COLUMNS)?;

    for k in kicks {
        writer.write_record([
            k.match_id.as_str(),
            k.matchup.as_deref().unwrap_or(""),
            k.shot_order.to_string().as_str(),
            flag(k.take_first),
            opt_flag(k.goal),
            opt_flag(k.missed),
            opt_flag(k.saved),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
