//! Per-file classification on top of the core pipelines.

use anyhow::{Context, Result};
use sonority_core::{
    Category, ClassifiedFourVoice, ClassifiedThreeVoice, FourVoicePipeline, Tally, ThreeVoicePipeline,
    Variant,
};
use std::path::Path;

use crate::input::{load_rows, InputRow, Rows, Voices};

/// Classified rows of one file, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSonorities {
    /// Labels of a 3-voice file, in row order.
    Three(Vec<InputRow<ClassifiedThreeVoice>>),
    /// Bands of a 4-voice file, in row order.
    Four(Vec<InputRow<ClassifiedFourVoice>>),
}

impl FileSonorities {
    /// Number of classified rows.
    pub fn len(&self) -> usize {
        match self {
            FileSonorities::Three(rows) => rows.len(),
            FileSonorities::Four(rows) => rows.len(),
        }
    }

    /// True if the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Categories in row order.
    pub fn categories(&self) -> Vec<Category> {
        match self {
            FileSonorities::Three(rows) => rows.iter().map(|r| r.row.category()).collect(),
            FileSonorities::Four(rows) => rows.iter().map(|r| r.row.category()).collect(),
        }
    }

    /// Counts per category.
    pub fn tally(&self) -> Tally {
        self.categories().into_iter().collect()
    }

    /// One line per row: line number, normalized set and label.
    pub fn row_lines(&self) -> Vec<String> {
        match self {
            FileSonorities::Three(rows) => rows
                .iter()
                .map(|r| format!("{:>6}  {}  {}", r.line, r.row.selection.set, r.row.label))
                .collect(),
            FileSonorities::Four(rows) => rows
                .iter()
                .map(|r| format!("{:>6}  {}  {}", r.line, r.row.selection, r.row.band))
                .collect(),
        }
    }
}

/// Classifies loaded rows in order, failing on the first malformed row.
pub fn classify_rows(rows: &Rows, variant: Variant) -> Result<FileSonorities> {
    match rows {
        Rows::Three(rows) => {
            let pipeline = ThreeVoicePipeline::new(variant);
            rows.iter()
                .map(|r| {
                    let row = pipeline
                        .classify_row(&r.row)
                        .with_context(|| format!("line {}", r.line))?;
                    Ok(InputRow { line: r.line, row })
                })
                .collect::<Result<Vec<_>>>()
                .map(FileSonorities::Three)
        }
        Rows::Four(rows) => {
            let pipeline = FourVoicePipeline::new(variant);
            Ok(FileSonorities::Four(
                rows.iter()
                    .map(|r| InputRow {
                        line: r.line,
                        row: pipeline.classify_row(&r.row),
                    })
                    .collect(),
            ))
        }
    }
}

/// Loads and classifies one CSV file.
pub fn classify_file(path: &Path, voices: Voices, variant: Variant) -> Result<FileSonorities> {
    let rows = load_rows(path, voices)?;
    classify_rows(&rows, variant).with_context(|| format!("Failed to classify: {}", path.display()))
}

/// Categories a report lists for this voice count and rule set.
///
/// Fuller 4-voice reports leave out doubly imperfect, which that cascade
/// never yields.
pub fn report_categories(voices: Voices, variant: Variant) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| {
            !(voices == Voices::Four
                && variant == Variant::Fuller
                && *c == Category::DoublyImperfect)
        })
        .collect()
}
