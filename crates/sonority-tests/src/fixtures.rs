//! Test fixtures for writing indexer-style interval CSVs.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header rows written before the data, as the indexer exports them.
pub const THREE_VOICE_HEADER: &str = "Indexer,VerticalIntervalIndexer,,\nParts,S-A,S-T,A-T\n,,,\n";

/// Header rows for 4-voice exports.
pub const FOUR_VOICE_HEADER: &str = "Indexer,VerticalIntervalIndexer,,,,,\nParts,1-2,1-3,1-4,2-3,2-4,3-4\n,,,,,,\n";

/// A temporary directory of interval CSVs.
pub struct CorpusFixture {
    pub root: TempDir,
}

impl CorpusFixture {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the corpus root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a raw file.
    pub fn add_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Write a 3-voice export, one row per `[S-A, S-T, A-T]` triple.
    pub fn add_three_voice(&self, name: &str, rows: &[[&str; 3]]) -> PathBuf {
        self.add_raw(name, &with_offsets(THREE_VOICE_HEADER, rows))
    }

    /// Write a 4-voice export, one row per six pairwise intervals.
    pub fn add_four_voice(&self, name: &str, rows: &[[&str; 6]]) -> PathBuf {
        self.add_raw(name, &with_offsets(FOUR_VOICE_HEADER, rows))
    }
}

impl Default for CorpusFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn with_offsets<const N: usize>(header: &str, rows: &[[&str; N]]) -> String {
    let mut content = header.to_string();
    for (i, row) in rows.iter().enumerate() {
        content.push_str(&format!("{}.0,{}\n", i * 2, row.join(",")));
    }
    content
}
