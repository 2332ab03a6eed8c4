// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cue sheet inspection tool.
//!
//! Validates cue sheet files and previews the beat schedule a scene will
//! consume from them, without touching any rendering pipeline:
//! - `cueline check sheet.ron` validates and summarizes
//! - `cueline plan sheet.ron` prints the derived beat table
//!
//! Sheets are bare lists of seconds (`[1.0, 3.0, 6.0]`), in RON or JSON
//! depending on the file extension.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use cueline_core::CueSheet;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "cueline", version, about = "Validate cue sheets and preview beat schedules")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Tool subcommands
#[derive(Subcommand)]
enum Command {
    /// Validate a cue sheet file
    Check {
        /// Path to a `.ron` or `.json` cue sheet
        sheet: PathBuf,
    },
    /// Print the beat schedule derived from a cue sheet
    Plan {
        /// Path to a `.ron` or `.json` cue sheet
        sheet: PathBuf,
        /// Emit the schedule as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Tool errors
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Sheet file extension is neither `.ron` nor `.json`
    #[error("unsupported sheet format {0:?} (expected .ron or .json)")]
    UnsupportedFormat(PathBuf),

    /// Sheet file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sheet file is not a valid RON cue sheet
    #[error("invalid RON cue sheet: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// Sheet file is not a valid JSON cue sheet
    #[error("invalid JSON cue sheet: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sheet file encoding, chosen by extension
enum SheetFormat {
    Ron,
    Json,
}

fn sheet_format(path: &Path) -> Result<SheetFormat, CliError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => Ok(SheetFormat::Ron),
        Some("json") => Ok(SheetFormat::Json),
        _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn load_sheet(path: &Path) -> Result<CueSheet, CliError> {
    let format = sheet_format(path)?;
    let content = fs::read_to_string(path)?;
    match format {
        SheetFormat::Ron => Ok(ron::from_str(&content)?),
        SheetFormat::Json => Ok(serde_json::from_str(&content)?),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Check { sheet } => {
            let sheet = load_sheet(&sheet)?;
            match sheet.end_time() {
                Some(end) => println!("OK: {} cues, ends at {end}s", sheet.len()),
                None => println!("OK: empty sheet, no beats"),
            }
        }
        Command::Plan { sheet, json } => {
            let sheet = load_sheet(&sheet)?;
            let beats = sheet.beats();
            if json {
                println!("{}", serde_json::to_string_pretty(&beats)?);
            } else {
                println!("{:>4}  {:>8}  {:>8}", "beat", "start", "duration");
                for beat in &beats {
                    println!(
                        "{:>4}  {:>8.2}  {:>8.2}",
                        beat.index, beat.start, beat.duration
                    );
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("cueline_core=debug".parse().unwrap());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ron_sheet_parses() {
        let sheet: CueSheet = ron::from_str("[1.0, 3.0, 6.0]").unwrap();
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.end_time(), Some(6.0));
    }

    #[test]
    fn test_json_sheet_rejects_unordered_cues() {
        assert!(serde_json::from_str::<CueSheet>("[2.0, 1.0]").is_err());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = load_sheet(Path::new("pacing.toml")).unwrap_err();
        assert!(matches!(err, CliError::UnsupportedFormat(_)));
    }
}
