use crate::config::{update_last_sync_commit, TemplateConfig, TEMPLATE_REMOTE};
use crate::error::Result;
use crate::git::{GitRepo, NameStatus};
use crate::output::Output;
use crate::prompt::prompt_yes_no;
use crate::sync::files::SyncFilter;
use crate::sync::types::{RemoteSetup, SyncOptions, SyncPlan, SyncResult};
use std::path::Path;

/// Number of skipped paths listed before the rest are summarised.
pub const MAX_SKIPPED_SHOWN: usize = 10;

pub fn setup_template_remote(
    repo: &GitRepo,
    config: &TemplateConfig,
    out: &Output,
) -> Result<RemoteSetup> {
    out.step("Checking template remote configuration...");

    match repo.remote_url(TEMPLATE_REMOTE)? {
        None => {
            out.item(format!("Adding template remote: {}", config.repository));
            repo.add_remote(TEMPLATE_REMOTE, &config.repository)?;
            Ok(RemoteSetup::Added)
        }
        Some(current) if current != config.repository => {
            out.item(format!(
                "Updating template remote: {} -> {}",
                current, config.repository
            ));
            repo.set_remote_url(TEMPLATE_REMOTE, &config.repository)?;
            Ok(RemoteSetup::Updated { previous: current })
        }
        Some(_) => {
            out.success("Template remote already configured");
            Ok(RemoteSetup::Unchanged)
        }
    }
}

pub fn fetch_template_updates(repo: &GitRepo, config: &TemplateConfig, out: &Output) -> Result<()> {
    out.step(format!("Fetching updates from template ({})...", config.branch));
    repo.fetch(TEMPLATE_REMOTE, &config.branch)?;
    out.success("Fetch complete");
    Ok(())
}

/// Paths changed in the template since the last sync (or versus HEAD on the first sync).
pub fn get_template_changes(
    repo: &GitRepo,
    config: &TemplateConfig,
    out: &Output,
) -> Result<Vec<String>> {
    let base = if config.has_synced() {
        out.step(format!(
            "Checking changes since last sync ({})...",
            config.short_last_sync()
        ));
        match repo.verify_commit(&config.last_sync_commit) {
            Ok(commit) => Some(commit),
            Err(e) => {
                tracing::warn!("last_sync_commit is unusable: {}", e);
                None
            }
        }
    } else {
        out.step("Checking all template changes (first sync)...");
        Some("HEAD".to_string())
    };

    let template_ref = config.template_ref();
    let diff = match base {
        Some(base) => repo.diff_name_only(&base, &template_ref).map_err(|e| {
            tracing::warn!("diff against {} failed: {}", base, e);
        }),
        None => Err(()),
    };
    let files = match diff {
        Ok(files) => files,
        Err(()) => {
            out.warning("Could not compare with last sync, showing all changes");
            repo.ls_tree_names(&template_ref)?
        }
    };

    out.item(format!("Found {} changed files in template", files.len()));
    Ok(files)
}

pub fn plan_sync(changed_files: &[String], config: &TemplateConfig) -> SyncPlan {
    let filter = SyncFilter::new(config);
    let mut plan = SyncPlan::default();

    for path in changed_files {
        if filter.should_sync(path) {
            if config.is_smart_merge(path) {
                plan.smart_merge.push(path.clone());
            }
            plan.to_sync.push(path.clone());
        } else {
            plan.to_skip.push(path.clone());
        }
    }

    plan.to_sync.sort();
    plan.to_skip.sort();
    plan.smart_merge.sort();
    plan
}

pub fn preview_changes(plan: &SyncPlan, out: &Output) {
    out.step("Preview of sync operation:");

    if !plan.to_sync.is_empty() {
        out.blank();
        out.item("Files to sync:");
        for path in &plan.to_sync {
            let marker = if plan.smart_merge.contains(path) {
                " (smart merge)"
            } else {
                ""
            };
            out.item(format!("   \u{2713} {}{}", path, marker));
        }
    }

    if !plan.to_skip.is_empty() {
        out.blank();
        out.item("Files to skip (project-specific):");
        for path in plan.to_skip.iter().take(MAX_SKIPPED_SHOWN) {
            out.item(format!("   \u{2298} {}", path));
        }
        if plan.to_skip.len() > MAX_SKIPPED_SHOWN {
            out.item(format!(
                "   ... and {} more",
                plan.to_skip.len() - MAX_SKIPPED_SHOWN
            ));
        }
    }
}

pub fn merge_commit_message(config: &TemplateConfig) -> String {
    format!("chore: sync with template ({})", config.branch)
}

fn confirm(options: &SyncOptions, prompt: &str) -> Result<bool> {
    if options.assume_yes {
        return Ok(true);
    }
    prompt_yes_no(prompt, false)
}

/// Merge the fetched template branch and record the synced commit.
pub fn perform_sync(
    repo: &GitRepo,
    root: &Path,
    config: &TemplateConfig,
    options: &SyncOptions,
    out: &Output,
) -> Result<SyncResult> {
    if options.dry_run {
        out.step("DRY RUN MODE - No changes will be made");
        return Ok(SyncResult::succeeded("Dry run completed successfully"));
    }

    out.step("Starting sync operation...");

    let current_branch = repo.current_branch()?;

    if repo.has_uncommitted_changes()? {
        out.warning("You have uncommitted changes.");
        if !confirm(options, "Continue with sync?")? {
            return Ok(SyncResult::cancelled());
        }
    }

    let template_ref = config.template_ref();
    let head_before = repo.get_head()?;

    out.item(format!("Merging {} into {}...", template_ref, current_branch));
    let merge = repo.merge_no_ff(
        &template_ref,
        &merge_commit_message(config),
        options.allow_unrelated_histories,
    )?;

    if !merge.success {
        let conflicts = repo.unmerged_paths()?;

        if conflicts.is_empty() {
            return Ok(SyncResult::failed(format!("Merge failed: {}", merge.stderr)));
        }

        out.warning("Merge conflicts detected:");
        for path in &conflicts {
            out.warning(format!("   {}", path));
        }
        out.blank();
        out.item("Please resolve conflicts manually:");
        out.item("   1. Edit conflicted files");
        out.item("   2. git add <resolved-files>");
        out.item("   3. git commit");
        out.item("   4. Run this command again to update .templaterc");

        return Ok(SyncResult::conflicted(conflicts));
    }

    let new_commit = repo.rev_parse(&template_ref)?;
    update_last_sync_commit(root, &new_commit)?;
    out.success(format!(
        "Updated .templaterc with commit {}",
        crate::config::short_hash(&new_commit)
    ));

    let mut result = SyncResult::succeeded("Template sync completed successfully");
    for (status, path) in repo.diff_name_status(&head_before, "HEAD")? {
        match status {
            NameStatus::Added => result.new_files.push(path),
            NameStatus::Modified => result.modified_files.push(path),
            NameStatus::Deleted | NameStatus::Other => {}
        }
    }

    out.blank();
    out.success("Merge completed successfully");
    Ok(result)
}
