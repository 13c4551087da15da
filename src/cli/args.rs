use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wizard", version)]
#[command(
    about = "Keep projects created from the wizard template in shape: rename, sync and export to Copier"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Merge upstream template changes into this project")]
    TemplateSync {
        #[arg(long, help = "Preview changes without merging")]
        dry_run: bool,

        #[arg(short = 'y', long, help = "Skip confirmation prompts")]
        yes: bool,

        #[arg(long, help = "Pass --allow-unrelated-histories to git merge")]
        allow_unrelated_histories: bool,

        #[arg(long, help = "Print the sync result as JSON")]
        json: bool,
    },
    #[command(about = "Convert this project into a Copier template")]
    GenerateCopierTemplate {
        #[arg(
            long,
            default_value = wizard_template::copier::DEFAULT_OUTPUT_DIR,
            help = "Output directory for the copier template"
        )]
        output_dir: PathBuf,

        #[arg(long, default_value = ".", help = "Project to convert")]
        source_dir: PathBuf,

        #[arg(long, help = "Overwrite an existing output directory without asking")]
        force: bool,

        #[arg(long, help = "List the template variables and exit")]
        list_variables: bool,
    },
    #[command(about = "Replace template identifiers after cloning")]
    RenameProject {
        #[arg(long, help = "Show a diff of the changes without writing them")]
        dry_run: bool,

        #[arg(long, help = "Stage all changes with git add -A afterwards")]
        stage: bool,
    },
    #[command(about = "Inspect the .templaterc configuration")]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    #[command(about = "Show current configuration values")]
    Show {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    #[command(about = "Show config file path")]
    Path,
}
