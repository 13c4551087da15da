pub mod ini;
pub mod persistence;
pub mod schema;

pub use persistence::*;
pub use schema::*;

pub const CONFIG_FILE_NAME: &str = ".templaterc";

/// Name of the git remote that points at the upstream template.
pub const TEMPLATE_REMOTE: &str = "template";

fn default_branch() -> String {
    "main".to_string()
}
