use crate::cli::Commands;
use std::path::Path;
use wizard_template::error::{Result, WizardError};

/// `--json` keeps stdout machine-readable, so it cannot be combined with prompts.
pub fn validate_sync_flags(dry_run: bool, yes: bool, json: bool) -> Result<()> {
    if json && !(dry_run || yes) {
        return Err(WizardError::Config(
            "--json requires --yes or --dry-run, since prompts would corrupt the output"
                .to_string(),
        ));
    }
    Ok(())
}

pub fn validate_copier_dirs(source_dir: &Path, output_dir: &Path) -> Result<()> {
    if !source_dir.is_dir() {
        return Err(WizardError::Config(format!(
            "Source directory {} does not exist",
            source_dir.display()
        )));
    }

    let source = source_dir.canonicalize()?;
    if let Ok(output) = output_dir.canonicalize() {
        if output == source || source.starts_with(&output) {
            return Err(WizardError::Config(format!(
                "Output directory {} would overwrite the source project",
                output_dir.display()
            )));
        }
    }
    Ok(())
}

pub fn validate_command(command: &Commands) -> Result<()> {
    match command {
        Commands::TemplateSync {
            dry_run, yes, json, ..
        } => validate_sync_flags(*dry_run, *yes, *json),
        Commands::GenerateCopierTemplate {
            output_dir,
            source_dir,
            list_variables,
            ..
        } => {
            if *list_variables {
                return Ok(());
            }
            validate_copier_dirs(source_dir, output_dir)
        }
        Commands::RenameProject { .. } | Commands::Config { .. } => Ok(()),
    }
}
