//! One-shot rename of a project cloned from the template.

pub mod content;
pub mod url;

pub use content::{
    community_badge, find_target_files, format_diff, rename_project_content, RenameOptions,
    RenamePlan, RenameReport, ORIGINAL_PROJECT_NAME, ORIGINAL_USERNAME, TARGET_FILES,
};
pub use url::{match_git_url, repo_info_with_fallback, GitInfo};

use crate::error::Result;
use crate::git::GitRepo;
use crate::output::Output;
use std::path::Path;

/// Work out the new owner and name from `origin` (or the user), then rewrite the project.
pub fn run_rename<F>(root: &Path, options: &RenameOptions, ask: F, out: &Output) -> Result<RenameReport>
where
    F: FnMut(&str) -> Result<String>,
{
    out.line("The wizard will now prepare your project...");

    let repo = GitRepo::from_path(root).ok();
    let info = repo_info_with_fallback(repo.as_ref(), ask, out)?;
    tracing::info!("Renaming project to {}/{}", info.username, info.repo);

    let plan = RenamePlan::new(info)?;
    let report = rename_project_content(root, &plan, options, repo.as_ref(), out)?;

    if options.dry_run {
        out.step(format!(
            "Dry run: {} file(s) would change. Run without --dry-run to apply.",
            report.changed_files.len()
        ));
    } else {
        out.line("Done!");
    }
    Ok(report)
}
