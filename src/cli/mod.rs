//! Command-line interface components
//!
//! This module contains CLI-specific code for the MiniApp report generator:
//! argument parsing and the command handlers.

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, ConfigAction, ConfigArgs, GlobalArgs, ManifestArgs, ManifestKind,
    ReportArgs,
};
pub use commands::{handle_check, handle_config, handle_manifest, handle_report, handle_template};
