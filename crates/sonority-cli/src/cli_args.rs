//! CLI argument definitions for the sonority command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use sonority_cli::input::Voices;
use std::path::PathBuf;

/// Sonority - Fuller/Hartt sonority tallies and strip graphs
#[derive(Parser)]
#[command(name = "sonority")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub(crate) struct ClassifyArgs {
    /// Interval CSV files exported by the vertical interval indexer
    pub files: Vec<PathBuf>,

    /// Number of voices in the inputs
    #[arg(long, value_enum, default_value = "3")]
    pub voices: Voices,

    /// Rule set: fuller, or fuller extended with hartt
    #[arg(long, default_value = "fuller", value_parser = ["fuller", "hartt"])]
    pub variant: String,

    /// Print every row's normalized intervals and label
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Count sonority categories per file and across files
    Tally {
        #[command(flatten)]
        common: ClassifyArgs,

        /// Print only the counts summed over all files
        #[arg(long, conflicts_with = "per_file")]
        aggregate: bool,

        /// Print only per-file counts
        #[arg(long)]
        per_file: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Draw one strip PNG per input file
    Graph {
        #[command(flatten)]
        common: ClassifyArgs,

        /// Output directory (default: beside each input file)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Render config JSON (band width, heights, hatch periods, palette)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
