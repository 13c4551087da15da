pub mod config;
pub mod copier;
pub mod rename;
pub mod sync;

pub use config::handle_config_command;
pub use rename::rename_project;
pub use sync::template_sync;
