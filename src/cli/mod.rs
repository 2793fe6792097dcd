//! CLI command definitions and handlers

mod complexity;
mod cycles;
mod escapes;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::discovery;
use crate::reporters::OutputFormat;

/// cogcheck - heuristic static analysis for curly-brace codebases
///
/// Runs three independent analyses over a source tree: function complexity
/// limits, circular import detection, and type escape-hatch detection.
#[derive(Parser, Debug)]
#[command(name = "cogcheck")]
#[command(
    version,
    about = "Heuristic static analysis — complexity limits, circular imports, and type escape hatches",
    after_help = "\
Examples:
  cogcheck .                        Run all three analyses
  cogcheck complexity src           Complexity scoring only
  cogcheck cycles . --format json   Cycle report as JSON only
  cogcheck escapes . -o report.json Write escape report to a file"
)]
pub struct Cli {
    /// Path to the source tree (default: current directory)
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score function complexity against the fixed limits (lines, params, depth)
    Complexity {
        /// Output format: text (summary + JSON) or json (report only)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Write the JSON report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Detect circular module dependencies in the import graph
    Cycles {
        /// Output format: text (summary + JSON) or json (report only)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Write the JSON report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Detect type escape hatches (any, @ts-ignore, double casts)
    Escapes {
        /// Output format: text (summary + JSON) or json (report only)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Write the JSON report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Complexity { format, output }) => {
            complexity::run(&cli.path, format.parse()?, output.as_deref())
        }
        Some(Commands::Cycles { format, output }) => {
            cycles::run(&cli.path, format.parse()?, output.as_deref())
        }
        Some(Commands::Escapes { format, output }) => {
            escapes::run(&cli.path, format.parse()?, output.as_deref())
        }
        None => {
            // Default: run all three analyses as text
            complexity::run(&cli.path, OutputFormat::Text, None)?;
            cycles::run(&cli.path, OutputFormat::Text, None)?;
            escapes::run(&cli.path, OutputFormat::Text, None)
        }
    }
}

/// Discover source files with a spinner on stderr; the spinner never
/// pollutes report output.
pub(crate) fn discover_with_spinner(
    root: &Path,
    extensions: &[&str],
) -> Result<Vec<PathBuf>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Discovering source files...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let files = discovery::discover_files(root, extensions)?;

    spinner.finish_and_clear();
    Ok(files)
}

/// Print the summary (text mode only), then emit the JSON report to stdout
/// or the requested file.
pub(crate) fn emit(
    summary: &str,
    report_json: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    if format == OutputFormat::Text {
        println!("{summary}");
    }
    match output {
        Some(path) => {
            std::fs::write(path, report_json)?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{report_json}"),
    }
    Ok(())
}
