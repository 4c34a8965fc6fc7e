//! Tally command implementation
//!
//! Classifies every row of every input file and prints category counts per
//! file, aggregated across files, or both.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use sonority_core::{FileTally, SonorityError, Tally, TallyReport, Variant};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use super::reporting;
use crate::input::Voices;
use crate::sonorities::{classify_file, report_categories, FileSonorities};

/// Which views of the counts to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// One block per file.
    PerFile,
    /// One block summed over all files.
    Aggregate,
    /// Per-file blocks followed by the sum.
    Both,
}

impl ReportMode {
    /// True if per-file counts are shown.
    pub fn shows_files(&self) -> bool {
        matches!(self, ReportMode::PerFile | ReportMode::Both)
    }

    /// True if the total is shown.
    pub fn shows_total(&self) -> bool {
        matches!(self, ReportMode::Aggregate | ReportMode::Both)
    }
}

/// Decides the report mode.
///
/// An explicit mode wins. A single file is always reported per file. With
/// several files `ask` is consulted; `None` from it (no answer) shows both.
pub fn resolve_mode<F>(explicit: Option<ReportMode>, file_count: usize, ask: F) -> io::Result<ReportMode>
where
    F: FnOnce() -> io::Result<Option<bool>>,
{
    if let Some(mode) = explicit {
        return Ok(mode);
    }
    if file_count < 2 {
        return Ok(ReportMode::PerFile);
    }
    Ok(match ask()? {
        Some(true) => ReportMode::Aggregate,
        Some(false) => ReportMode::PerFile,
        None => ReportMode::Both,
    })
}

/// Asks whether to aggregate until a y/n answer is given. End of input
/// yields `None`.
pub fn prompt_aggregate<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<bool>> {
    loop {
        write!(output, "Aggregate counts across files? (y/n): ")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => continue,
        }
    }
}

/// A file that could not be tallied.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    /// Input path as given.
    pub file: String,
    /// Core error code, if the failure came from classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Full error chain.
    pub message: String,
}

impl FileFailure {
    fn new(file: String, err: &anyhow::Error) -> Self {
        Self {
            file,
            code: err
                .downcast_ref::<SonorityError>()
                .map(|e| e.code().code().to_string()),
            message: format!("{:#}", err),
        }
    }
}

/// Machine-readable tally report.
#[derive(Debug, Clone, Serialize)]
pub struct TallyOutput {
    /// True if every file was tallied.
    pub success: bool,
    /// Voice count.
    pub voices: Voices,
    /// Rule set.
    pub variant: Variant,
    /// Views included below.
    pub mode: ReportMode,
    /// Per-file counts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileTally>,
    /// Sum over all tallied files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Tally>,
    /// Files that failed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FileFailure>,
}

impl TallyOutput {
    /// Builds the output from a finished report.
    pub fn new(
        voices: Voices,
        variant: Variant,
        mode: ReportMode,
        report: TallyReport,
        errors: Vec<FileFailure>,
    ) -> Self {
        Self {
            success: errors.is_empty(),
            voices,
            variant,
            mode,
            files: if mode.shows_files() { report.files } else { Vec::new() },
            total: mode.shows_total().then_some(report.total),
            errors,
        }
    }
}

/// Tallies of every file that classified, plus the files that did not.
#[derive(Debug, Clone, Default)]
pub struct TallyRun {
    /// Per-file counts and their total.
    pub report: TallyReport,
    /// Failed files in input order.
    pub failures: Vec<FileFailure>,
}

/// Classifies each file in order, continuing past failures. `on_file` sees
/// every file's outcome before it is folded into the run.
pub fn tally_files<F>(files: &[PathBuf], voices: Voices, variant: Variant, mut on_file: F) -> TallyRun
where
    F: FnMut(&str, &Result<FileSonorities>),
{
    let mut run = TallyRun::default();

    for path in files {
        let display = path.display().to_string();
        let result = classify_file(path, voices, variant);
        on_file(&display, &result);

        match result {
            Ok(sonorities) => run.report.push(display, sonorities.tally()),
            Err(e) => run.failures.push(FileFailure::new(display, &e)),
        }
    }

    run
}

/// Run the tally command
///
/// # Arguments
/// * `files` - Input CSV files
/// * `voices` - Voice count of the inputs
/// * `variant` - Rule set
/// * `mode` - Report mode; `None` decides from the file count and, when
///   stdin is a terminal, a prompt
/// * `json_output` - Print a JSON report instead of colored text
/// * `verbose` - Print every row's normalized set and label
///
/// # Returns
/// Exit code: 0 if every file was tallied, 1 otherwise
pub fn run(
    files: &[PathBuf],
    voices: Voices,
    variant: Variant,
    mode: Option<ReportMode>,
    json_output: bool,
    verbose: bool,
) -> Result<ExitCode> {
    if files.is_empty() {
        println!("Please specify a file(s)");
        return Ok(ExitCode::SUCCESS);
    }

    let interactive = !json_output && io::stdin().is_terminal();
    let mode = resolve_mode(mode, files.len(), || {
        if interactive {
            prompt_aggregate(&mut io::stdin().lock(), &mut io::stdout())
        } else {
            Ok(None)
        }
    })?;

    let TallyRun { report, failures } = tally_files(files, voices, variant, |file, result| {
        if json_output {
            return;
        }
        println!(
            "{} {} ({}, {})",
            "Tallying:".cyan().bold(),
            file,
            voices,
            variant
        );
        match result {
            Ok(sonorities) if verbose => reporting::print_rows(&sonorities.row_lines()),
            Ok(_) => {}
            Err(e) => reporting::print_file_error(file, e),
        }
    });

    let exit = if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };

    if json_output {
        let output = TallyOutput::new(voices, variant, mode, report, failures);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(exit);
    }

    let categories = report_categories(voices, variant);
    let ranked = voices == Voices::Three;

    if mode.shows_files() {
        for file in &report.files {
            reporting::print_counts(&file.file, &file.tally, &categories, ranked);
        }
    }
    if mode.shows_total() {
        let title = format!("All files ({})", report.files.len());
        reporting::print_counts(&title, &report.total, &categories, ranked);
    }

    if !failures.is_empty() {
        eprintln!(
            "\n{} {} of {} file(s) failed",
            "!".yellow(),
            failures.len(),
            files.len()
        );
    }

    Ok(exit)
}
