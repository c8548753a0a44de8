//! Delimited-table codec.
//!
//! Reads the raw kick table and writes both the enriched output table and
//! raw kick tables (the latter for the synthetic generator). Column names
//! and the output column order are fixed; see `writer::OUTPUT_COLUMNS`.

pub mod reader;
pub mod writer;

pub use reader::{read_kicks, read_kicks_from_path, TableError};
pub use writer::{write_enriched, write_kicks, OUTPUT_COLUMNS};
