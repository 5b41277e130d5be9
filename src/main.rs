//! MiniApp Report CLI application
//!
//! Command-line interface for building W3C MiniApp conformance reports from a
//! test corpus and per-implementation test results.

use std::process;

use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use miniapp_report::cli::{
    handle_check, handle_config, handle_manifest, handle_report, handle_template, Cli, Commands,
};
use miniapp_report::config::AppConfig;
use miniapp_report::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        debug!("Command failed with {} error", e.category());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Config must load before logging so its level can apply
    let config = AppConfig::load(cli.global.config.clone()).await?;

    init_logging(&cli, &config);

    info!("MiniApp Report v{} starting", env!("CARGO_PKG_VERSION"));
    let quiet = cli.global.quiet;

    match cli.command {
        Commands::Report(args) => {
            info!("Executing report command");
            handle_report(args, &config, quiet).await
        }
        Commands::Template(args) => {
            info!("Executing template command");
            handle_template(args, &config, quiet).await
        }
        Commands::Check(args) => {
            info!("Executing check command");
            handle_check(args, &config, quiet).await
        }
        Commands::Manifest(args) => {
            info!("Executing manifest command");
            handle_manifest(args).await
        }
        Commands::Config(args) => {
            info!("Executing config command");
            handle_config(args, &config).await
        }
    }
}

/// Initialize logging from CLI verbosity flags, falling back to the configured level
fn init_logging(cli: &Cli, config: &AppConfig) {
    let level = cli
        .log_level()
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| config.logging.level.clone());

    let mut filter = EnvFilter::from_default_env();
    match format!("miniapp_report={}", level).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(_) => {
            if let Ok(directive) = "miniapp_report=warn".parse() {
                filter = filter.add_directive(directive);
            }
        }
    }

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
    debug!("Effective log level: {}", level);
}
