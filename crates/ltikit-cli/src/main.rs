//! ltikit CLI
//!
//! Command-line interface for ltikit

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod settings;

#[derive(Debug, Parser)]
#[command(name = "ltikit")]
#[command(about = "ltikit - Tool cartridge parsing and launch configuration", long_about = None)]
struct Cli {
    /// Settings file (default: ./ltikit.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL prepended to relative launch and icon URLs
    #[arg(long, global = true, value_name = "URL")]
    host: Option<String>,

    /// Seconds before a descriptor request is abandoned
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Logging profile: development, production or test
    #[arg(long, global = true, value_name = "PROFILE")]
    log_profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a descriptor (URL or file) and print it as JSON
    Extract(commands::extract::ExtractArgs),
    /// Sanitize submitted form fields into a tool record
    Sanitize(commands::sanitize::SanitizeArgs),
    /// Derive a launch configuration from a tool record
    Derive(commands::derive::DeriveArgs),
    /// Structural diff of two JSON documents
    Diff(commands::diff::DiffArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = settings::Overrides {
        host: cli.host,
        fetch_timeout_secs: cli.timeout,
        log_profile: cli.log_profile,
    };
    let settings = settings::load(cli.config.as_deref(), &overrides)?;
    ltikit_core::logging_facility::init(settings.profile()?);

    match cli.command {
        Commands::Extract(args) => commands::extract::execute(args, &settings),
        Commands::Sanitize(args) => commands::sanitize::execute(args),
        Commands::Derive(args) => commands::derive::execute(args, &settings),
        Commands::Diff(args) => commands::diff::execute(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
