pub mod config;
pub mod copier;
pub mod demo;
pub mod error;
pub mod git;
pub mod output;
pub mod prompt;
pub mod rename;
pub mod sync;

pub use config::get_config_path;
pub use config::load_config;
pub use config::save_config;
pub use config::update_last_sync_commit;
pub use config::TemplateConfig;

pub use error::{Result, WizardError};

pub use git::GitRepo;

pub use sync::{run_template_sync, SyncOptions, SyncResult};
