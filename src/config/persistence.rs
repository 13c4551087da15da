use crate::config::ini;
use crate::config::schema::TemplateConfig;
use crate::error::{Result, WizardError};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

pub fn get_config_path(root: &Path) -> PathBuf {
    root.join(super::CONFIG_FILE_NAME)
}

pub fn load_config(root: &Path) -> Result<TemplateConfig> {
    let config_path = get_config_path(root);
    if !config_path.exists() {
        return Err(WizardError::ConfigNotFound(root.to_path_buf()));
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        WizardError::Config(format!(
            "Failed to read {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let doc = ini::parse(&content)?;
    let config = TemplateConfig::from_document(&doc)?;
    tracing::debug!(
        "Loaded {} (template {} @ {})",
        config_path.display(),
        config.repository,
        config.branch
    );
    Ok(config)
}

pub fn save_config(root: &Path, config: &TemplateConfig) -> Result<()> {
    let config_path = get_config_path(root);
    let content = ini::render(&config.to_document());
    std::fs::write(&config_path, content).map_err(|e| {
        WizardError::Config(format!(
            "Failed to write {}: {}",
            config_path.display(),
            e
        ))
    })?;
    Ok(())
}

/// Rewrite `last_sync_commit` in place, leaving the rest of the file untouched.
pub fn update_last_sync_commit(root: &Path, commit_hash: &str) -> Result<()> {
    if commit_hash.is_empty() || commit_hash.chars().any(char::is_whitespace) {
        return Err(WizardError::InvalidValue(format!(
            "Invalid commit hash '{}'",
            commit_hash
        )));
    }

    let config_path = get_config_path(root);
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        WizardError::Config(format!(
            "Failed to read {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let updated = replace_last_sync_commit(&content, commit_hash)?;

    std::fs::write(&config_path, updated).map_err(|e| {
        WizardError::Config(format!(
            "Failed to write {}: {}",
            config_path.display(),
            e
        ))
    })?;

    tracing::info!("Recorded last_sync_commit {}", commit_hash);
    Ok(())
}

pub(crate) fn replace_last_sync_commit(content: &str, commit_hash: &str) -> Result<String> {
    let key_line = Regex::new(r"(?m)^([ \t]*last_sync_commit[ \t]*[=:][ \t]*)[^\r\n]*")?;

    if key_line.is_match(content) {
        return Ok(key_line
            .replace_all(content, |caps: &Captures| {
                let prefix = &caps[1];
                if prefix.ends_with(['=', ':']) {
                    format!("{} {}", prefix, commit_hash)
                } else {
                    format!("{}{}", prefix, commit_hash)
                }
            })
            .into_owned());
    }

    let header = Regex::new(r"(?m)^[ \t]*\[template\][ \t]*$")?;
    let found = header.find(content).ok_or_else(|| {
        WizardError::Config("No [template] section found in .templaterc".to_string())
    })?;

    let mut updated = String::with_capacity(content.len() + commit_hash.len() + 20);
    updated.push_str(&content[..found.end()]);
    updated.push_str(&format!("\nlast_sync_commit = {}", commit_hash));
    updated.push_str(&content[found.end()..]);
    Ok(updated)
}
