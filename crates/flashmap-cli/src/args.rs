//! Command-line argument definitions for the Flashmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! the initial expansion of the tree view, configuration file selection, and
//! logging verbosity.

use clap::{Parser, ValueEnum};

/// Output formats supported by the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented bullet outline of the whole map
    #[default]
    Outline,
    /// Normalized flowchart text
    Diagram,
    /// Expand/collapse tree view
    Tree,
}

/// Command-line arguments for the Flashmap mind-map tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Outline)]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Node ids to expand in the tree view
    #[arg(long, value_name = "ID")]
    pub expand: Vec<String>,

    /// Node ids to collapse in the tree view, applied after expansions
    #[arg(long, value_name = "ID")]
    pub collapse: Vec<String>,

    /// Expand every node in the tree view before applying --expand/--collapse
    #[arg(long)]
    pub expand_all: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
