//! Graph command implementation
//!
//! Writes one strip PNG per input file, one band per row.

use anyhow::{Context, Result};
use colored::Colorize;
use sonority_core::Variant;
use sonority_render::png::write_rgb;
use sonority_render::{
    png_path, render_four_voice, render_three_voice, PngConfig, RenderConfig, RenderError,
    StripBuffer,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::reporting;
use crate::input::Voices;
use crate::sonorities::{classify_file, FileSonorities};

/// Draws the strip for one classified file.
pub fn render(sonorities: &FileSonorities, config: &RenderConfig) -> Result<StripBuffer, RenderError> {
    match sonorities {
        FileSonorities::Three(rows) => {
            let labels: Vec<_> = rows.iter().map(|r| r.row.label).collect();
            render_three_voice(&labels, config)
        }
        FileSonorities::Four(rows) => {
            let bands: Vec<_> = rows.iter().map(|r| r.row.band).collect();
            render_four_voice(&bands, config)
        }
    }
}

/// Loads the render config, or the defaults without a path.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("Failed to load render config: {}", path.display())),
        None => Ok(RenderConfig::default()),
    }
}

/// Run the graph command
///
/// # Arguments
/// * `files` - Input CSV files
/// * `voices` - Voice count of the inputs
/// * `variant` - Rule set
/// * `out_dir` - Output directory (default: beside each input)
/// * `config_path` - Optional render config JSON
/// * `verbose` - Print every row's normalized set and label
///
/// # Returns
/// Exit code: 0 on success. Stops at the first file that fails.
pub fn run(
    files: &[PathBuf],
    voices: Voices,
    variant: Variant,
    out_dir: Option<&Path>,
    config_path: Option<&Path>,
    verbose: bool,
) -> Result<ExitCode> {
    if files.is_empty() {
        println!("Please specify a file(s)");
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(config_path)?;
    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }
    let png_config = PngConfig::default();

    for path in files {
        println!(
            "{} {} ({}, {})",
            "Graphing:".cyan().bold(),
            path.display(),
            voices,
            variant
        );

        let sonorities = classify_file(path, voices, variant)?;
        if verbose {
            reporting::print_rows(&sonorities.row_lines());
        }

        let strip = render(&sonorities, &config)
            .with_context(|| format!("Failed to render: {}", path.display()))?;
        let output = png_path(path, out_dir);
        write_rgb(&strip, &output, &png_config)
            .with_context(|| format!("Failed to write: {}", output.display()))?;

        println!(
            "  {} {} ({} bands, {}x{})",
            "Wrote".green().bold(),
            output.display(),
            sonorities.len(),
            strip.width,
            strip.height
        );
    }

    Ok(ExitCode::SUCCESS)
}
