mod commands;
mod logging;
mod progress;

use std::env::VarError;
use std::path::Path;
use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands, IndexArgs, TrimArgs};
use dotenv::dotenv;
use libree_core::storage::Service;
use libree_core::{AppConfig, IndexEngine};
use progress::DotReporter;
use shellexpand::LookupError;
use tracing::{debug, error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match libree_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Index(index_args)) => {
            if let Err(err) = run_index(&config, index_args) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Trim(trim_args)) => {
            if let Err(err) = run_trim(&trim_args) {
                error!("{}", err);
                process::exit(1);
            }
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn run_index(config: &AppConfig, args: IndexArgs) -> Result<(), Box<dyn std::error::Error>> {
    let directory = expand_directory(&args.directory)?;

    let service = Service::new(
        &config.service_url(args.url.as_deref()),
        config.username(),
        config.password()?,
    )?;
    let engine = IndexEngine::new(service).with_account(config.storage_account.clone());

    let reporter = DotReporter::new();
    let report = engine.index(Path::new(&directory), &reporter)?;

    println!();
    println!("{}", serde_json::to_string_pretty(&report.name_counts)?);

    info!(
        "Indexed {} files in {}, {} repeated names",
        format!("{}", report.files_posted).green(),
        format!("{:.2}s", report.duration.as_secs_f64()).green(),
        format!("{}", report.duplicate_names).yellow(),
    );

    Ok(())
}

/// Reserved. Parses its flags but never touches the store.
fn run_trim(args: &TrimArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(pattern) = &args.exclude {
        debug!("Trim would keep records matching {}", pattern);
    }
    Err("Not implemented!".into())
}

/// Shell-style environment expansion for the directory argument. An unset
/// variable is an error, not an empty substitution.
fn expand_directory(raw: &str) -> Result<String, LookupError<VarError>> {
    Ok(shellexpand::env(raw)?.into_owned())
}
