//! Sonority CLI - sonority tallies and strip graphs from interval CSVs
//!
//! This binary classifies every row of 3- or 4-voice interval exports after
//! Fuller (1986), optionally extended by Hartt (2010), and either counts the
//! categories or draws them as strip images.

mod cli_args;

use clap::Parser;
use cli_args::{Cli, ClassifyArgs, Commands};
use sonority_cli::commands::{self, ReportMode};
use sonority_core::Variant;
use std::process::ExitCode;

fn parse_variant(common: &ClassifyArgs) -> anyhow::Result<Variant> {
    common.variant.parse::<Variant>().map_err(anyhow::Error::msg)
}

fn report_mode(aggregate: bool, per_file: bool) -> Option<ReportMode> {
    if aggregate {
        Some(ReportMode::Aggregate)
    } else if per_file {
        Some(ReportMode::PerFile)
    } else {
        None
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Tally {
            common,
            aggregate,
            per_file,
            json,
        } => commands::tally::run(
            &common.files,
            common.voices,
            parse_variant(&common)?,
            report_mode(aggregate, per_file),
            json,
            common.verbose,
        ),
        Commands::Graph {
            common,
            out_dir,
            config,
        } => commands::graph::run(
            &common.files,
            common.voices,
            parse_variant(&common)?,
            out_dir.as_deref(),
            config.as_deref(),
            common.verbose,
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonority_cli::input::Voices;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parses_tally() {
        let cli = Cli::try_parse_from([
            "sonority", "tally", "a.csv", "b.csv", "--voices", "4", "--variant", "hartt", "--aggregate",
        ])
        .unwrap();
        match cli.command {
            Commands::Tally {
                common,
                aggregate,
                per_file,
                json,
            } => {
                assert_eq!(common.files, vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
                assert_eq!(common.voices, Voices::Four);
                assert_eq!(parse_variant(&common).unwrap(), Variant::Hartt);
                assert!(aggregate);
                assert!(!per_file);
                assert!(!json);
            }
            _ => panic!("expected tally command"),
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["sonority", "graph", "motet.csv"]).unwrap();
        match cli.command {
            Commands::Graph {
                common,
                out_dir,
                config,
            } => {
                assert_eq!(common.voices, Voices::Three);
                assert_eq!(parse_variant(&common).unwrap(), Variant::Fuller);
                assert!(out_dir.is_none());
                assert!(config.is_none());
            }
            _ => panic!("expected graph command"),
        }
    }

    #[test]
    fn test_cli_allows_no_files() {
        let cli = Cli::try_parse_from(["sonority", "tally"]).unwrap();
        assert!(matches!(cli.command, Commands::Tally { common, .. } if common.files.is_empty()));
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["sonority", "tally", "--voices", "5", "a.csv"]).is_err());
        assert!(Cli::try_parse_from(["sonority", "tally", "--variant", "zarlino", "a.csv"]).is_err());
        assert!(
            Cli::try_parse_from(["sonority", "tally", "--aggregate", "--per-file", "a.csv"]).is_err()
        );
    }

    #[test]
    fn test_report_mode_flags() {
        assert_eq!(report_mode(true, false), Some(ReportMode::Aggregate));
        assert_eq!(report_mode(false, true), Some(ReportMode::PerFile));
        assert_eq!(report_mode(false, false), None);
    }
}
