use clap::Parser;
use std::path::PathBuf;

mod cli;
mod commands;

use cli::{Args, Commands};
use wizard_template::error::{self, WizardError};
use wizard_template::rename::RenameOptions;
use wizard_template::sync::SyncOptions;

fn main() {
    match run() {
        Ok(code) => {
            std::process::exit(code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn current_dir() -> error::Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| WizardError::Config(format!("Failed to get current directory: {}", e)))
}

fn run() -> error::Result<i32> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("WIZARD_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    cli::validate_command(&args.command)?;

    let cwd = current_dir()?;

    match args.command {
        Commands::TemplateSync {
            dry_run,
            yes,
            allow_unrelated_histories,
            json,
        } => {
            let options = SyncOptions {
                dry_run,
                assume_yes: yes,
                allow_unrelated_histories,
            };
            commands::template_sync(&cwd, options, json)
        }
        Commands::GenerateCopierTemplate {
            output_dir,
            source_dir,
            force,
            list_variables,
        } => {
            if list_variables {
                commands::copier::list_variables();
            } else {
                commands::copier::generate(&cwd, &source_dir, &output_dir, force)?;
            }
            Ok(0)
        }
        Commands::RenameProject { dry_run, stage } => {
            commands::rename_project(&cwd, RenameOptions { dry_run, stage })?;
            Ok(0)
        }
        Commands::Config { action } => {
            commands::handle_config_command(&cwd, action)?;
            Ok(0)
        }
    }
}
