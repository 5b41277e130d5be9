//! Command-line argument parsing for the MiniApp report generator
//!
//! This module defines the CLI structure using clap derive macros,
//! covering report generation, template creation, corpus checks,
//! manifest decoding, and configuration management.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// MiniApp Report - conformance reports for W3C MiniApp test suites
#[derive(Parser, Debug)]
#[command(
    name = "miniapp_report",
    version,
    about = "Aggregate MiniApp conformance test results into report tables",
    long_about = "Reads the metadata of a W3C MiniApp test corpus and the per-implementation test reports,
merges platform variants of the same implementation, and emits the report tables as JSON."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the report tables from a test corpus and implementation reports
    Report(ReportArgs),

    /// Emit a blank implementation report listing every test
    Template(ReportArgs),

    /// Check the structure of a test corpus
    Check(CheckArgs),

    /// Decode a manifest file
    Manifest(ManifestArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments shared by the report and template commands
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Test corpus directory (one subdirectory per test)
    #[arg(short, long, value_name = "DIR")]
    pub tests: Option<PathBuf>,

    /// Directory of implementation report files
    #[arg(short, long, value_name = "DIR")]
    pub reports: Option<PathBuf>,

    /// Write JSON to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the corpus check
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Test corpus directory
    #[arg(short, long, value_name = "DIR")]
    pub tests: Option<PathBuf>,

    /// Print the check result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Kind of manifest to decode
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Miniapp,
    Webapp,
}

/// Arguments for manifest decoding
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Path to the manifest file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Manifest schema to decode against
    #[arg(short, long, value_enum, default_value = "miniapp")]
    pub kind: ManifestKind,

    /// Print the decoded manifest re-encoded as JSON
    #[arg(long)]
    pub reencode: bool,
}

/// Arguments for configuration management
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Where to write the file (defaults to the user config directory)
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level forced by global arguments, if any
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}
