use crate::cli::ConfigAction;
use std::path::Path;
use wizard_template::config::{get_config_path, load_config};
use wizard_template::error::Result;

fn print_list(name: &str, items: &[String]) {
    if items.is_empty() {
        println!("    {}: (none)", name);
        return;
    }
    println!("    {}:", name);
    for item in items {
        println!("      {}", item);
    }
}

pub fn handle_config_command(root: &Path, action: Option<ConfigAction>) -> Result<()> {
    match action {
        Some(ConfigAction::Path) => {
            println!("Config location: {}", get_config_path(root).display());
        }
        Some(ConfigAction::Show { json: true }) => {
            let config = load_config(root)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None | Some(ConfigAction::Show { json: false }) => {
            let config = load_config(root)?;
            println!("Config file: {}", get_config_path(root).display());
            println!();
            println!("Current configuration:");
            println!("  Template:");
            println!("    repository: {}", config.repository);
            println!("    branch: {}", config.branch);
            if config.has_synced() {
                println!("    last_sync_commit: {}", config.last_sync_commit);
            } else {
                println!("    last_sync_commit: (never synced)");
            }
            println!("  Project:");
            println!("    username: {}", config.username);
            println!("    project_name: {}", config.project_name);
            println!("  Sync:");
            print_list("exclude_paths", &config.exclude_paths);
            print_list("sync_paths", &config.sync_paths);
            print_list("smart_merge_files", &config.smart_merge_files);
        }
    }
    Ok(())
}
