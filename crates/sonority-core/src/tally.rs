//! Per-file and aggregated category counts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::Category;

/// Count of rows per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    counts: BTreeMap<Category, u64>,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one row.
    pub fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    /// Rows counted for `category`.
    pub fn count(&self, category: Category) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Rows counted overall.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// True if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Adds another tally into this one.
    pub fn merge(&mut self, other: &Tally) {
        for (category, n) in &other.counts {
            *self.counts.entry(*category).or_insert(0) += n;
        }
    }

    /// Categories that occurred, most frequent first; ties keep category order.
    pub fn ranked(&self) -> Vec<(Category, u64)> {
        let mut ranked: Vec<(Category, u64)> = self
            .counts
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(c, n)| (*c, *n))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}

impl FromIterator<Category> for Tally {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        let mut tally = Tally::new();
        for category in iter {
            tally.record(category);
        }
        tally
    }
}

impl Extend<Category> for Tally {
    fn extend<T: IntoIterator<Item = Category>>(&mut self, iter: T) {
        for category in iter {
            self.record(category);
        }
    }
}

/// The tally of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTally {
    /// Input path as given.
    pub file: String,
    /// Its counts.
    pub tally: Tally,
}

/// Per-file tallies plus their grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TallyReport {
    /// Files in input order.
    pub files: Vec<FileTally>,
    /// Sum over `files`.
    pub total: Tally,
}

impl TallyReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file and folds it into the total.
    pub fn push(&mut self, file: impl Into<String>, tally: Tally) {
        self.total.merge(&tally);
        self.files.push(FileTally {
            file: file.into(),
            tally,
        });
    }
}
