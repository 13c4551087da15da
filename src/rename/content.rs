use crate::error::{Result, WizardError};
use crate::git::GitRepo;
use crate::output::Output;
use crate::rename::url::GitInfo;
use glob::Pattern;
use regex::{NoExpand, Regex};
use serde::Serialize;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const ORIGINAL_USERNAME: &str = "fschuch";
pub const ORIGINAL_PROJECT_NAME: &str = "wizard-template";

/// File-name globs of the files whose text is rewritten.
pub const TARGET_FILES: &[&str] = &["*.py", "*.md", "*.yaml", "*.toml", "LICENSE"];

/// Hatch script entry that runs the rename itself.
const HATCH_SCRIPT_PATTERN: &str = r#"_wizard\s?=\s?\[".+"\]\n"#;
const LEGACY_SCRIPT_PATTERN: &str = r#"(post_)?wizard\s?=\s?".+""#;

pub fn community_badge(username: &str, repo: &str) -> String {
    format!(
        "[![Wizard Template](https://img.shields.io/badge/Wizard-Template-%23447CAA)](https://github.com/{}/{})",
        username, repo
    )
}

/// Everything needed to rewrite a freshly cloned project under its new name.
pub struct RenamePlan {
    pub info: GitInfo,
    replacements: Vec<(Regex, String)>,
    renamed_badge: String,
    original_badge: String,
}

impl RenamePlan {
    pub fn new(info: GitInfo) -> Result<Self> {
        let dash = info.repo.replace('_', "-");
        let underscore = info.repo.replace('-', "_");

        let literal = |s: &str| Regex::new(&regex::escape(s));
        let replacements = vec![
            (literal(ORIGINAL_USERNAME)?, info.username.clone()),
            (literal(ORIGINAL_PROJECT_NAME)?, info.repo.clone()),
            (literal(&ORIGINAL_PROJECT_NAME.replace('_', "-"))?, dash),
            (literal(&ORIGINAL_PROJECT_NAME.replace('-', "_"))?, underscore),
            (Regex::new(HATCH_SCRIPT_PATTERN)?, String::new()),
            (Regex::new(LEGACY_SCRIPT_PATTERN)?, String::new()),
        ];

        Ok(Self {
            renamed_badge: community_badge(&info.username, &info.repo),
            original_badge: community_badge(ORIGINAL_USERNAME, ORIGINAL_PROJECT_NAME),
            info,
            replacements,
        })
    }

    pub fn project_name_dash(&self) -> String {
        self.info.repo.replace('_', "-")
    }

    /// Python package name of the renamed project.
    pub fn project_name_underscore(&self) -> String {
        self.info.repo.replace('-', "_")
    }

    /// Apply the replacements, then point the community badge back at the
    /// original template.
    pub fn rename_text(&self, content: &str) -> String {
        let mut result = content.to_string();
        for (pattern, replacement) in &self.replacements {
            result = pattern
                .replace_all(&result, NoExpand(replacement))
                .into_owned();
        }
        result.replace(&self.renamed_badge, &self.original_badge)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    /// Print a diff of every change instead of writing it.
    pub dry_run: bool,
    /// Run `git add -A` once the project has been rewritten.
    pub stage: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub changed_files: Vec<String>,
    pub renamed_package: Option<(String, String)>,
    pub staged: bool,
}

pub fn format_diff(path: &str, old_content: &str, new_content: &str) -> String {
    let diff = TextDiff::from_lines(old_content, new_content);
    let mut result = format!("--- a/{}\n+++ b/{}\n", path, path);
    for group in diff.grouped_ops(3) {
        result.push_str("@@\n");
        for op in &group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                result.push(sign);
                result.push_str(change.value());
                if change.missing_newline() {
                    result.push('\n');
                }
            }
        }
    }
    result
}

/// Target files below `root`, sorted, skipping anything inside a dot-directory.
pub fn find_target_files(root: &Path) -> Result<Vec<PathBuf>> {
    let patterns: Vec<Pattern> = TARGET_FILES
        .iter()
        .map(|p| Pattern::new(p).map_err(|e| WizardError::Pattern(format!("{}: {}", p, e))))
        .collect::<Result<_>>()?;

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !entry.file_name().to_string_lossy().starts_with('.'));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            WizardError::Io(std::io::Error::other(format!(
                "Failed to walk {}: {}",
                root.display(),
                e
            )))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_target = {
            let name = entry.file_name().to_string_lossy();
            patterns.iter().any(|p| p.matches(&name))
        };
        if is_target {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn package_dirs(root: &Path, underscore: &str) -> Option<(PathBuf, PathBuf)> {
    let original = ORIGINAL_PROJECT_NAME.replace('-', "_");
    [root.join("src"), root.to_path_buf()]
        .into_iter()
        .map(|parent| (parent.join(&original), parent.join(underscore)))
        .find(|(from, _)| from.is_dir())
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Rewrite the project below `root` for its new owner and name.
pub fn rename_project_content(
    root: &Path,
    plan: &RenamePlan,
    options: &RenameOptions,
    repo: Option<&GitRepo>,
    out: &Output,
) -> Result<RenameReport> {
    let mut report = RenameReport::default();

    let package = package_dirs(root, &plan.project_name_underscore());
    let package_move = match &package {
        Some((from, to)) if from != to => {
            let from_rel = display_relative(root, from);
            let to_rel = display_relative(root, to);
            if to.exists() {
                return Err(WizardError::InvalidValue(format!(
                    "Cannot rename {} to {}: destination already exists",
                    from_rel, to_rel
                )));
            }
            Some((from_rel, to_rel, from.clone(), to.clone()))
        }
        _ => None,
    };

    for path in find_target_files(root)? {
        let relative = display_relative(root, &path);
        let original = fs::read_to_string(&path).map_err(|e| {
            WizardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;
        let renamed = plan.rename_text(&original);
        if renamed == original {
            tracing::debug!("No changes in {}", relative);
            continue;
        }

        if options.dry_run {
            out.line(format_diff(&relative, &original, &renamed));
        } else {
            out.line(format!("Replacing text on file {}", relative));
            fs::write(&path, renamed).map_err(|e| {
                WizardError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to write {}: {}", path.display(), e),
                ))
            })?;
        }
        report.changed_files.push(relative);
    }

    match package_move {
        Some((from_rel, to_rel, from, to)) => {
            out.line(format!("Renaming folder {} to {}", from_rel, to_rel));
            if !options.dry_run {
                fs::rename(&from, &to)?;
            }
            report.renamed_package = Some((from_rel, to_rel));
        }
        None if package.is_none() => {
            out.warning("No wizard_template package directory found, nothing to rename")
        }
        None => {}
    }

    if options.stage && !options.dry_run {
        match repo {
            Some(repo) => {
                out.line("Staging changes...");
                repo.add_all()?;
                report.staged = true;
            }
            None => out.warning("Not a git repository, skipping staging"),
        }
    }

    Ok(report)
}
