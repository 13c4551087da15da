use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the wizard binary for testing.
#[allow(dead_code)]
pub fn get_wizard_path() -> PathBuf {
    assert_cmd::cargo::cargo_bin!("wizard").to_path_buf()
}

/// Run git in `dir`, panicking with its stderr on failure. Returns trimmed stdout.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Git requires user.email and user.name for commits. Setting them per-repo
/// avoids depending on the user's global git config.
#[allow(dead_code)]
pub fn configure_identity(repo_path: &Path) {
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "user.name", "Test User"]);
}

#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, content).expect("Failed to write file");
}

#[allow(dead_code)]
pub fn commit_all(repo_path: &Path, message: &str) -> String {
    git(repo_path, &["add", "-A"]);
    git(repo_path, &["commit", "-q", "-m", message]);
    git(repo_path, &["rev-parse", "HEAD"])
}

/// Initialise an empty repository at `repo_path` whose first branch is `main`.
#[allow(dead_code)]
pub fn init_repo(repo_path: &Path) {
    fs::create_dir_all(repo_path).expect("Failed to create repo dir");
    git(repo_path, &["init", "-q"]);
    git(repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure_identity(repo_path);
}

/// A repository with a single commit containing `README.md`.
#[allow(dead_code)]
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo_path = temp_dir.path().join("test-repo");

    init_repo(&repo_path);
    write_file(&repo_path, "README.md", "# Test Repo\n");
    commit_all(&repo_path, "Initial commit");

    (temp_dir, repo_path)
}

#[allow(dead_code)]
pub fn templaterc(repository: &Path, last_sync_commit: &str) -> String {
    format!(
        "[template]\n\
         repository = {}\n\
         branch = main\n\
         last_sync_commit = {}\n\
         \n\
         [project]\n\
         username = alice\n\
         project_name = my-lib\n\
         \n\
         [sync]\n\
         exclude_paths =\n    \
             docs/private/*\n\
         sync_paths =\n\
         smart_merge_files =\n    \
             pyproject.toml\n",
        repository.display(),
        last_sync_commit
    )
}

/// An upstream template repository and a downstream project cloned from it.
#[allow(dead_code)]
pub struct SyncWorkspace {
    pub temp_dir: TempDir,
    pub template_path: PathBuf,
    pub project_path: PathBuf,
}

#[allow(dead_code)]
impl SyncWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let template_path = temp_dir.path().join("template");
        let project_path = temp_dir.path().join("project");

        init_repo(&template_path);
        write_file(&template_path, "README.md", "# Template\n");
        write_file(
            &template_path,
            "pyproject.toml",
            "[project]\nname = \"wizard-template\"\nversion = \"0.1.0\"\n",
        );
        write_file(&template_path, "src/wizard_template/core.py", "VALUE = 1\n");
        commit_all(&template_path, "Template v1");

        git(
            temp_dir.path(),
            &[
                "clone",
                "-q",
                &template_path.to_string_lossy(),
                &project_path.to_string_lossy(),
            ],
        );
        configure_identity(&project_path);
        write_file(&project_path, ".templaterc", &templaterc(&template_path, ""));
        commit_all(&project_path, "Add .templaterc");

        Self {
            temp_dir,
            template_path,
            project_path,
        }
    }

    /// A downstream project that shares no history with the template.
    pub fn unrelated() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let template_path = temp_dir.path().join("template");
        let project_path = temp_dir.path().join("project");

        init_repo(&template_path);
        write_file(&template_path, ".gitignore", "__pycache__/\n");
        commit_all(&template_path, "Template v1");

        init_repo(&project_path);
        write_file(&project_path, "README.md", "# Project\n");
        write_file(&project_path, ".templaterc", &templaterc(&template_path, ""));
        commit_all(&project_path, "Project start");

        Self {
            temp_dir,
            template_path,
            project_path,
        }
    }

    pub fn template_commit(&self, files: &[(&str, &str)], message: &str) -> String {
        for (relative, content) in files {
            write_file(&self.template_path, relative, content);
        }
        commit_all(&self.template_path, message)
    }

    pub fn project_commit(&self, files: &[(&str, &str)], message: &str) -> String {
        for (relative, content) in files {
            write_file(&self.project_path, relative, content);
        }
        commit_all(&self.project_path, message)
    }

    pub fn project_head(&self) -> String {
        git(&self.project_path, &["rev-parse", "HEAD"])
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        fs::read_to_string(self.project_path.join(relative)).expect("Failed to read file")
    }
}
