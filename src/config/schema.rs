use crate::config::ini::IniDocument;
use crate::error::{Result, WizardError};
use serde::{Deserialize, Serialize};

pub const TEMPLATE_SECTION: &str = "template";
pub const PROJECT_SECTION: &str = "project";
pub const SYNC_SECTION: &str = "sync";

/// Settings loaded from `.templaterc` in the downstream project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub repository: String,
    #[serde(default = "super::default_branch")]
    pub branch: String,
    #[serde(default)]
    pub last_sync_commit: String,
    pub username: String,
    pub project_name: String,
    #[serde(default)]
    pub exclude_paths: Vec<String>,
    #[serde(default)]
    pub sync_paths: Vec<String>,
    #[serde(default)]
    pub smart_merge_files: Vec<String>,
}

impl TemplateConfig {
    pub fn new(
        repository: impl Into<String>,
        username: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            branch: super::default_branch(),
            last_sync_commit: String::new(),
            username: username.into(),
            project_name: project_name.into(),
            exclude_paths: Vec::new(),
            sync_paths: Vec::new(),
            smart_merge_files: Vec::new(),
        }
    }

    /// Remote-tracking ref the template branch is fetched into.
    pub fn template_ref(&self) -> String {
        format!("{}/{}", super::TEMPLATE_REMOTE, self.branch)
    }

    pub fn has_synced(&self) -> bool {
        !self.last_sync_commit.is_empty()
    }

    pub fn short_last_sync(&self) -> &str {
        short_hash(&self.last_sync_commit)
    }

    pub fn is_smart_merge(&self, path: &str) -> bool {
        self.smart_merge_files.iter().any(|f| f == path)
    }

    pub fn from_document(doc: &IniDocument) -> Result<Self> {
        let required = |section: &str, key: &str| -> Result<String> {
            doc.get(section, key)
                .map(|v| v.trim().to_string())
                .ok_or_else(|| WizardError::MissingOption {
                    section: section.to_string(),
                    key: key.to_string(),
                })
        };
        let optional = |section: &str, key: &str| -> Option<String> {
            doc.get(section, key).map(|v| v.trim().to_string())
        };
        let list = |key: &str| -> Vec<String> {
            doc.get(SYNC_SECTION, key)
                .map(parse_list)
                .unwrap_or_default()
        };

        Ok(Self {
            repository: required(TEMPLATE_SECTION, "repository")?,
            branch: optional(TEMPLATE_SECTION, "branch").unwrap_or_else(super::default_branch),
            last_sync_commit: optional(TEMPLATE_SECTION, "last_sync_commit").unwrap_or_default(),
            username: required(PROJECT_SECTION, "username")?,
            project_name: required(PROJECT_SECTION, "project_name")?,
            exclude_paths: list("exclude_paths"),
            sync_paths: list("sync_paths"),
            smart_merge_files: list("smart_merge_files"),
        })
    }

    pub fn to_document(&self) -> IniDocument {
        let mut doc = IniDocument::new();
        doc.set(TEMPLATE_SECTION, "repository", self.repository.as_str());
        doc.set(TEMPLATE_SECTION, "branch", self.branch.as_str());
        doc.set(
            TEMPLATE_SECTION,
            "last_sync_commit",
            self.last_sync_commit.as_str(),
        );
        doc.set(PROJECT_SECTION, "username", self.username.as_str());
        doc.set(PROJECT_SECTION, "project_name", self.project_name.as_str());
        doc.set(SYNC_SECTION, "exclude_paths", format_list(&self.exclude_paths));
        doc.set(SYNC_SECTION, "sync_paths", format_list(&self.sync_paths));
        doc.set(
            SYNC_SECTION,
            "smart_merge_files",
            format_list(&self.smart_merge_files),
        );
        doc
    }
}

pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(8) {
        Some((index, _)) => &hash[..index],
        None => hash,
    }
}

/// Parse a newline-delimited list value, dropping blanks, comments and quotes.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_matches('"').trim_matches('\'').to_string())
        .collect()
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut value = String::new();
    for item in items {
        value.push('\n');
        value.push_str(item);
    }
    value
}
