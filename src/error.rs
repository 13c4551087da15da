use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WizardError>;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error(
        ".templaterc file not found in {0}\nPlease ensure you're in the project root and .templaterc exists"
    )]
    ConfigNotFound(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing option '{key}' in section [{section}] of .templaterc")]
    MissingOption { section: String, key: String },

    #[error("Git error: {0}")]
    Git(String),

    #[error("Could not parse git URL: {0}")]
    InvalidGitUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Input must be an integer, got {0}.")]
    NotAnInteger(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error("Aborted: {0}")]
    Aborted(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        WizardError::Json(err.to_string())
    }
}

impl From<regex::Error> for WizardError {
    fn from(err: regex::Error) -> Self {
        WizardError::Pattern(err.to_string())
    }
}
