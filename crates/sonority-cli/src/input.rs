//! CSV ingestion for vertical-interval exports.
//!
//! Exports start with metadata rows (`Indexer`, `Parts`, then a row with an
//! empty first field) followed by one data row per offset. Only the trailing
//! interval columns are kept; leading offset columns are ignored.

use anyhow::{Context, Result};
use serde::Serialize;
use sonority_core::{FourVoiceRow, ThreeVoiceRow, FOUR_VOICE_COLUMNS, THREE_VOICE_COLUMNS};
use std::io::Read;
use std::path::Path;

/// First-field values that mark a metadata row.
pub const HEADER_MARKERS: &[&str] = &["Indexer", "Parts"];

/// Number of voices in the analysed texture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum, Serialize)]
#[serde(into = "u8")]
pub enum Voices {
    /// Soprano, alto, tenor: three interval columns.
    #[default]
    #[value(name = "3")]
    Three,
    /// Four voices: six interval columns.
    #[value(name = "4")]
    Four,
}

impl Voices {
    /// Number of trailing interval columns per row.
    pub fn columns(&self) -> usize {
        match self {
            Voices::Three => THREE_VOICE_COLUMNS,
            Voices::Four => FOUR_VOICE_COLUMNS,
        }
    }

    /// Voice count as a number.
    pub fn count(&self) -> u8 {
        match self {
            Voices::Three => 3,
            Voices::Four => 4,
        }
    }
}

impl From<Voices> for u8 {
    fn from(voices: Voices) -> Self {
        voices.count()
    }
}

impl std::fmt::Display for Voices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} voices", self.count())
    }
}

/// A data row with the CSV line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow<T> {
    /// 1-based line number.
    pub line: u64,
    /// Parsed interval cells.
    pub row: T,
}

/// All data rows of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rows {
    /// Rows of a 3-voice export.
    Three(Vec<InputRow<ThreeVoiceRow>>),
    /// Rows of a 4-voice export.
    Four(Vec<InputRow<FourVoiceRow>>),
}

impl Rows {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        match self {
            Rows::Three(rows) => rows.len(),
            Rows::Four(rows) => rows.len(),
        }
    }

    /// True if the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw CSV fields of a data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number.
    pub line: u64,
    /// Fields in column order.
    pub fields: Vec<String>,
}

/// Returns true if a record starting with `first` is metadata, not data.
pub fn is_header_marker(first: &str) -> bool {
    let first = first.trim();
    first.is_empty() || HEADER_MARKERS.contains(&first)
}

/// Reads data records, skipping metadata rows.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read CSV record {}", index + 1))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        match record.get(0) {
            Some(first) if !is_header_marker(first) => records.push(Record {
                line,
                fields: record.iter().map(str::to_string).collect(),
            }),
            _ => continue,
        }
    }

    Ok(records)
}

/// Parses data rows for `voices` from any reader.
pub fn parse_rows<R: Read>(reader: R, voices: Voices) -> Result<Rows> {
    let records = read_records(reader)?;

    match voices {
        Voices::Three => records
            .iter()
            .map(|r| {
                let row = ThreeVoiceRow::from_fields(&r.fields)
                    .with_context(|| format!("line {}", r.line))?;
                Ok(InputRow { line: r.line, row })
            })
            .collect::<Result<Vec<_>>>()
            .map(Rows::Three),
        Voices::Four => records
            .iter()
            .map(|r| {
                let row = FourVoiceRow::from_fields(&r.fields)
                    .with_context(|| format!("line {}", r.line))?;
                Ok(InputRow { line: r.line, row })
            })
            .collect::<Result<Vec<_>>>()
            .map(Rows::Four),
    }
}

/// Loads data rows for `voices` from a CSV file.
pub fn load_rows(path: &Path, voices: Voices) -> Result<Rows> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;
    parse_rows(std::io::BufReader::new(file), voices)
        .with_context(|| format!("Failed to parse: {}", path.display()))
}
