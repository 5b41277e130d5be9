//! Command handlers for the MiniApp report CLI
//!
//! This module implements the command handlers that connect CLI arguments
//! and the loaded configuration to the core application functionality.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::manifest::{load_manifest, AppManifest, MiniAppManifest, WebAppManifest};
use crate::app::{
    build_report_data, check_test_corpus, generate_template, ManifestStatus, ReportData,
};
use crate::cli::{CheckArgs, ConfigAction, ConfigArgs, ManifestArgs, ManifestKind, ReportArgs};
use crate::config::AppConfig;
use crate::errors::{AppError, ReportError, Result};

/// Create a spinner on stderr, hidden in quiet mode
fn spinner(message: impl Into<String>, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["◐", "◓", "◑", "◒"]),
    );
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Write a value as pretty JSON to a file, or to stdout when no file is given
async fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    match output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .map_err(|source| ReportError::Output {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Resolve the input directories, flags taking precedence over the config file
fn resolve_dirs(args: &ReportArgs, config: &AppConfig) -> (PathBuf, PathBuf) {
    let tests = args
        .tests
        .clone()
        .unwrap_or_else(|| config.paths.tests_dir.clone());
    let reports = args
        .reports
        .clone()
        .unwrap_or_else(|| config.paths.reports_dir.clone());
    (tests, reports)
}

async fn load_report(args: &ReportArgs, config: &AppConfig, quiet: bool) -> Result<ReportData> {
    let report_config = config.report.to_runtime_config()?;
    let (tests_dir, reports_dir) = resolve_dirs(args, config);
    debug!(
        "Reading tests from {} and reports from {}",
        tests_dir.display(),
        reports_dir.display()
    );

    let start = Instant::now();
    let progress = spinner(
        format!("Reading {} and {}...", tests_dir.display(), reports_dir.display()),
        quiet,
    );
    let result = build_report_data(&tests_dir, &reports_dir, &report_config).await;
    progress.finish_and_clear();
    let report = result?;

    info!(
        "Loaded {} tests and {} implementation reports in {:?}",
        report.test_count(),
        report.implementers.len(),
        start.elapsed()
    );
    for warning in &report.warnings {
        warn!("Skipped {}: {}", warning.path.display(), warning.message);
    }
    Ok(report)
}

/// Handle the report command
///
/// Builds both report views and writes them as JSON. A short summary goes to
/// stderr so that stdout carries only the report.
pub async fn handle_report(args: ReportArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    let report = load_report(&args, config, quiet).await?;

    if !quiet {
        eprintln!(
            "📊 {} tests in {} tables, {} implementations ({} after consolidation)",
            report.test_count(),
            report.tables.len(),
            report.implementers.len(),
            report.consolidated_implementers.len()
        );
        if !report.warnings.is_empty() {
            eprintln!("⚠️  {} files skipped, run with -v for details", report.warnings.len());
        }
    }

    write_json(&report, args.output.as_deref()).await
}

/// Handle the template command
pub async fn handle_template(args: ReportArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    let report = load_report(&args, config, quiet).await?;
    let template = generate_template(&report);

    if !quiet {
        eprintln!("📝 Template lists {} tests", template.tests.len());
    }

    write_json(&template, args.output.as_deref()).await
}

/// Handle the check command
///
/// Fails when at least one test folder has a problem.
pub async fn handle_check(args: CheckArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    let report_config = config.report.to_runtime_config()?;
    let tests_dir = args
        .tests
        .unwrap_or_else(|| config.paths.tests_dir.clone());

    let progress = spinner(format!("Checking {}...", tests_dir.display()), quiet);
    let result = check_test_corpus(&tests_dir, &report_config).await;
    progress.finish_and_clear();
    let check = result?;

    if args.json {
        write_json(&check, None).await?;
    } else {
        println!("🔍 Test corpus: {}", tests_dir.display());
        println!("{:<40} {:<10} {}", "TEST", "METADATA", "MANIFEST");
        for folder in &check.folders {
            let manifest = match &folder.manifest {
                ManifestStatus::Valid { app_id } => format!("ok ({})", app_id),
                ManifestStatus::Missing => "missing".to_string(),
                ManifestStatus::Invalid { reason } => format!("invalid: {}", reason),
            };
            println!(
                "{:<40} {:<10} {}",
                folder.name,
                if folder.has_metadata { "ok" } else { "missing" },
                manifest
            );
        }
        if !check.packages.is_empty() {
            println!();
            println!("📦 Packages (not verified):");
            for package in &check.packages {
                println!("  • {}", package.display());
            }
        }
        println!();
        println!(
            "{} folders checked, {} with problems",
            check.folders.len(),
            check.failure_count()
        );
    }

    match check.failure_count() {
        0 => Ok(()),
        n => Err(AppError::generic(format!(
            "{} test folders failed the structure check",
            n
        ))),
    }
}

fn print_manifest<M: AppManifest>(manifest: &M) {
    println!("id:         {}", manifest.id());
    println!("name:       {}", manifest.name());
    if let Some(short_name) = manifest.short_name() {
        println!("short_name: {}", short_name);
    }
    if let Some(lang) = manifest.lang() {
        println!("lang:       {}", lang);
    }
    if let Some(dir) = manifest.dir() {
        println!("dir:        {:?}", dir);
    }
    println!("icons:      {}", manifest.icons().map_or(0, |icons| icons.len()));
}

async fn show_manifest<M: AppManifest>(path: &Path, reencode: bool) -> Result<()> {
    let manifest: M = load_manifest(path).await?;

    if reencode {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&manifest.encode()?)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    } else {
        print_manifest(&manifest);
    }
    Ok(())
}

/// Handle the manifest command
pub async fn handle_manifest(args: ManifestArgs) -> Result<()> {
    info!("Decoding {} as {:?} manifest", args.file.display(), args.kind);
    match args.kind {
        ManifestKind::Miniapp => show_manifest::<MiniAppManifest>(&args.file, args.reencode).await,
        ManifestKind::Webapp => show_manifest::<WebAppManifest>(&args.file, args.reencode).await,
    }
}

/// Handle the config command
pub async fn handle_config(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.action {
        ConfigAction::Init { path, force } => {
            let path = AppConfig::initialize(path, force).await?;
            println!("✅ Configuration file: {}", path.display());
        }
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
