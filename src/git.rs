use crate::error::{Result, WizardError};
use std::path::{Path, PathBuf};
use std::process::Output;

fn git_command(workdir: &Path, args: &[&str]) -> Result<Output> {
    tracing::debug!("git {} (in {})", args.join(" "), workdir.display());

    std::process::Command::new("git")
        .args(args)
        .current_dir(workdir)
        .output()
        .map_err(|e| {
            WizardError::Git(format!(
                "Failed to execute 'git {}' in {}: {}",
                args.join(" "),
                workdir.display(),
                e
            ))
        })
}

fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr.trim().to_string()
    }
}

fn run_git(workdir: &Path, args: &[&str], error_prefix: &str) -> Result<Output> {
    let output = git_command(workdir, args)?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!("git {} failed\nSTDOUT: {}\nSTDERR: {}", args.join(" "), stdout, stderr);
        return Err(WizardError::Git(format!(
            "{} (git {}): {}",
            error_prefix,
            args.join(" "),
            failure_text(&output)
        )));
    }

    Ok(output)
}

fn stdout_string(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Split command output into non-empty, trimmed lines.
pub fn parse_path_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Outcome of `git merge`, which is allowed to fail without aborting the caller.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub success: bool,
    pub stderr: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStatus {
    Added,
    Modified,
    Deleted,
    Other,
}

impl NameStatus {
    fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('A') => NameStatus::Added,
            Some('M') => NameStatus::Modified,
            Some('D') => NameStatus::Deleted,
            _ => NameStatus::Other,
        }
    }
}

/// Parse `git diff --name-status` output into (status, path) pairs.
///
/// Renames and copies report the destination path.
pub fn parse_name_status(stdout: &str) -> Vec<(NameStatus, String)> {
    stdout
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let code = fields.next()?.trim();
            let path = fields.last()?.trim();
            if code.is_empty() || path.is_empty() {
                return None;
            }
            Some((NameStatus::from_code(code), path.to_string()))
        })
        .collect()
}

/// Reject branch names git would refuse or that could be read as an option.
pub fn validate_branch_name(branch_name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(WizardError::Config(format!(
            "Invalid template branch '{}': {}",
            branch_name, reason
        )))
    };

    if branch_name.is_empty() {
        return invalid("name cannot be empty");
    }
    if branch_name.starts_with('-') {
        return invalid("name cannot start with '-'");
    }
    if branch_name.bytes().any(|byte| byte < 32 || byte == 127) {
        return invalid("name contains control characters");
    }
    for pattern in ["..", "~", "^", ":", "?", "*", "[", "\\", " ", "@{", "//"] {
        if branch_name.contains(pattern) {
            return invalid(&format!("name cannot contain '{}'", pattern));
        }
    }
    if branch_name.starts_with('/') || branch_name.ends_with('/') {
        return invalid("name cannot start or end with '/'");
    }
    if branch_name.starts_with('.') || branch_name.ends_with('.') || branch_name.ends_with(".lock")
    {
        return invalid("name cannot start or end with '.' or end with '.lock'");
    }

    Ok(())
}

/// Abbreviated or full hex object id, as written by `rev-parse`.
pub fn is_object_id(value: &str) -> bool {
    (4..=64).contains(&value.len()) && value.bytes().all(|byte| byte.is_ascii_hexdigit())
}

#[derive(Clone, Debug)]
pub struct GitRepo {
    pub workdir: PathBuf,
}

impl GitRepo {
    pub fn from_path(start_dir: &Path) -> Result<Self> {
        let workdir = find_workdir(start_dir)?;
        Ok(GitRepo { workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// URL of a remote, or `None` if the remote is not configured.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        let output = git_command(&self.workdir, &["remote", "get-url", name])?;
        if output.status.success() {
            Ok(Some(stdout_string(&output)))
        } else {
            Ok(None)
        }
    }

    pub fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        run_git(
            &self.workdir,
            &["remote", "add", "--end-of-options", name, url],
            "Failed to add remote",
        )?;
        Ok(())
    }

    pub fn set_remote_url(&self, name: &str, url: &str) -> Result<()> {
        run_git(
            &self.workdir,
            &["remote", "set-url", "--end-of-options", name, url],
            "Failed to update remote URL",
        )?;
        Ok(())
    }

    pub fn fetch(&self, remote: &str, branch: &str) -> Result<()> {
        validate_branch_name(branch)?;
        run_git(
            &self.workdir,
            &["fetch", "--end-of-options", remote, branch],
            "Failed to fetch",
        )?;
        Ok(())
    }

    /// Paths that differ between two revisions, or an error if either is unknown.
    pub fn diff_name_only(&self, base: &str, target: &str) -> Result<Vec<String>> {
        let output = run_git(
            &self.workdir,
            &["diff", "--name-only", "--end-of-options", base, target],
            "Failed to compare revisions",
        )?;
        Ok(parse_path_list(&String::from_utf8_lossy(&output.stdout)))
    }

    pub fn diff_name_status(&self, base: &str, target: &str) -> Result<Vec<(NameStatus, String)>> {
        let output = run_git(
            &self.workdir,
            &["diff", "--name-status", "--end-of-options", base, target],
            "Failed to compare revisions",
        )?;
        Ok(parse_name_status(&String::from_utf8_lossy(&output.stdout)))
    }

    pub fn ls_tree_names(&self, target: &str) -> Result<Vec<String>> {
        let output = run_git(
            &self.workdir,
            &["ls-tree", "-r", "--name-only", "--end-of-options", target],
            "Failed to list tree",
        )?;
        Ok(parse_path_list(&String::from_utf8_lossy(&output.stdout)))
    }

    pub fn rev_parse(&self, rev: &str) -> Result<String> {
        let output = run_git(
            &self.workdir,
            &["rev-parse", "--verify", "--end-of-options", rev],
            "Failed to resolve revision",
        )?;
        Ok(stdout_string(&output))
    }

    /// Resolve a recorded commit id to the full hash of an existing commit.
    pub fn verify_commit(&self, commit: &str) -> Result<String> {
        if !is_object_id(commit) {
            return Err(WizardError::Git(format!(
                "'{}' is not a commit id",
                commit
            )));
        }
        self.rev_parse(&format!("{}^{{commit}}", commit))
    }

    pub fn get_head(&self) -> Result<String> {
        self.rev_parse("HEAD")
    }

    pub fn current_branch(&self) -> Result<String> {
        let output = run_git(
            &self.workdir,
            &["rev-parse", "--abbrev-ref", "HEAD"],
            "Failed to get current branch",
        )?;
        Ok(stdout_string(&output))
    }

    /// `git status --porcelain` lines, one per changed or untracked path.
    pub fn status_porcelain(&self) -> Result<Vec<String>> {
        let output = run_git(
            &self.workdir,
            &["status", "--porcelain"],
            "Failed to check for uncommitted changes",
        )?;
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    pub fn has_uncommitted_changes(&self) -> Result<bool> {
        Ok(!self.status_porcelain()?.is_empty())
    }

    pub fn merge_no_ff(
        &self,
        target: &str,
        message: &str,
        allow_unrelated_histories: bool,
    ) -> Result<MergeOutcome> {
        let mut args = vec!["merge", "--no-ff", "--no-edit"];
        if allow_unrelated_histories {
            args.push("--allow-unrelated-histories");
        }
        args.extend(["-m", message, "--end-of-options", target]);

        let output = git_command(&self.workdir, &args)?;
        let outcome = MergeOutcome {
            success: output.status.success(),
            stderr: failure_text(&output),
        };
        if !outcome.success {
            tracing::warn!("git merge {} failed: {}", target, outcome.stderr);
        }
        Ok(outcome)
    }

    /// Paths left unmerged by a conflicting merge.
    pub fn unmerged_paths(&self) -> Result<Vec<String>> {
        let output = run_git(
            &self.workdir,
            &["diff", "--name-only", "--diff-filter=U"],
            "Failed to list unmerged paths",
        )?;
        Ok(parse_path_list(&String::from_utf8_lossy(&output.stdout)))
    }

    pub fn config_get(&self, key: &str) -> Result<String> {
        let output = run_git(
            &self.workdir,
            &["config", "--get", key],
            "Failed to read git config",
        )?;
        Ok(stdout_string(&output))
    }

    pub fn add_all(&self) -> Result<()> {
        run_git(&self.workdir, &["add", "-A"], "Failed to stage changes")?;
        Ok(())
    }
}

fn find_workdir(start_dir: &Path) -> Result<PathBuf> {
    let mut current = start_dir;

    loop {
        // `.git` is a directory in a normal clone and a file in worktrees/submodules.
        if current.join(".git").exists() {
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    Err(WizardError::Git(format!(
        "Not a git repository: {}",
        start_dir.display()
    )))
}
