//! Pull upstream template changes into a downstream project.
//!
//! The heavy lifting (fetch, diff, merge, conflict detection) is done by git;
//! this module decides which changed paths matter, drives the merge and
//! records the synced template commit in `.templaterc`.

use crate::config::load_config;
use crate::error::Result;
use crate::git::GitRepo;
use crate::output::Output;
use crate::prompt::prompt_yes_no;
use std::path::Path;

pub mod files;
pub mod ops;
pub mod types;

pub use crate::sync::files::{should_sync_file, CompiledPatterns, SyncFilter, DEFAULT_SYNC_PREFIXES};
pub use crate::sync::ops::{
    fetch_template_updates, get_template_changes, perform_sync, plan_sync, preview_changes,
    setup_template_remote,
};
pub use crate::sync::types::{RemoteSetup, SyncOptions, SyncPlan, SyncResult};

pub fn run_template_sync(root: &Path, options: &SyncOptions, out: &Output) -> Result<SyncResult> {
    out.header("Wizard Template Sync Tool");

    let config = load_config(root)?;
    out.step(format!(
        "Project: {}/{}",
        config.username, config.project_name
    ));
    out.line(format!("Template: {}", config.repository));

    let repo = GitRepo::from_path(root)?;

    let remote = setup_template_remote(&repo, &config, out)?;
    tracing::debug!("template remote: {:?}", remote);
    fetch_template_updates(&repo, &config, out)?;

    let changed_files = get_template_changes(&repo, &config, out)?;
    if changed_files.is_empty() {
        out.step("No template updates available. Your project is up-to-date!");
        return Ok(SyncResult::succeeded("Project is up-to-date"));
    }

    let plan = plan_sync(&changed_files, &config);
    preview_changes(&plan, out);

    if options.dry_run {
        let result = perform_sync(&repo, root, &config, options, out)?;
        out.step("Dry run complete. Use without --dry-run to apply changes.");
        return Ok(result);
    }

    out.separator();
    if !options.assume_yes && !prompt_yes_no("Proceed with sync?", false)? {
        out.step("Sync cancelled");
        return Ok(SyncResult::declined());
    }

    let result = perform_sync(&repo, root, &config, options, out)?;
    report_result(&result, out);
    Ok(result)
}

pub fn report_result(result: &SyncResult, out: &Output) {
    out.separator();
    if result.success {
        out.line(format!("\u{2713} {}", result.message));
        if !result.new_files.is_empty() || !result.modified_files.is_empty() {
            out.item(format!(
                "{} new, {} modified",
                result.new_files.len(),
                result.modified_files.len()
            ));
        }
        out.step("Next steps:");
        out.item("1. Review the changes: git log -1 --stat");
        out.item("2. Test your project");
        out.item("3. Push changes: git push");
    } else {
        eprintln!("\u{2717} {}", result.message);
        if result.has_conflicts() {
            out.warning("Conflicts need manual resolution");
        }
    }
}
