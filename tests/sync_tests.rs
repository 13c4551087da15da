mod common;

use common::{commit_all, git, templaterc, write_file, SyncWorkspace};
use rstest::rstest;
use wizard_template::config::{load_config, TemplateConfig};
use wizard_template::git::GitRepo;
use wizard_template::output::Output;
use wizard_template::sync::{
    get_template_changes, run_template_sync, setup_template_remote, RemoteSetup, SyncOptions,
};

fn auto_yes() -> SyncOptions {
    SyncOptions {
        assume_yes: true,
        ..Default::default()
    }
}

#[test]
fn test_sync_merges_and_records_template_commit() {
    let workspace = SyncWorkspace::new();
    let template_head = workspace.template_commit(
        &[
            (".github/workflows/ci.yaml", "name: CI\n"),
            ("pyproject.toml", "[project]\nname = \"wizard-template\"\nversion = \"0.2.0\"\n"),
        ],
        "Add CI and bump version",
    );

    let result = run_template_sync(&workspace.project_path, &auto_yes(), &Output::quiet())
        .expect("sync should run");

    assert!(result.success, "sync failed: {}", result.message);
    assert_eq!(result.message, "Template sync completed successfully");
    assert_eq!(result.new_files, vec![".github/workflows/ci.yaml"]);
    assert_eq!(result.modified_files, vec!["pyproject.toml"]);
    assert!(result.conflicts.is_empty());

    let config = load_config(&workspace.project_path).unwrap();
    assert_eq!(config.last_sync_commit, template_head);
    assert_eq!(
        workspace.read_project_file(".github/workflows/ci.yaml"),
        "name: CI\n"
    );

    let message = git(&workspace.project_path, &["log", "-1", "--format=%s"]);
    assert_eq!(message, "chore: sync with template (main)");

    let remote = git(&workspace.project_path, &["remote", "get-url", "template"]);
    assert_eq!(remote, workspace.template_path.to_string_lossy());
}

#[test]
fn test_sync_only_touches_last_sync_commit_line() {
    let workspace = SyncWorkspace::new();
    let before = workspace.read_project_file(".templaterc");
    let template_head = workspace.template_commit(&[("docs/index.md", "# Docs\n")], "Docs");

    let result =
        run_template_sync(&workspace.project_path, &auto_yes(), &Output::quiet()).unwrap();
    assert!(result.success);

    let after = workspace.read_project_file(".templaterc");
    let changed: Vec<(&str, &str)> = before
        .lines()
        .zip(after.lines())
        .filter(|(b, a)| b != a)
        .collect();
    let expected = format!("last_sync_commit = {}", template_head);
    assert_eq!(changed, vec![("last_sync_commit = ", expected.as_str())]);
}

#[test]
fn test_second_sync_is_up_to_date() {
    let workspace = SyncWorkspace::new();
    workspace.template_commit(&[(".gitignore", "dist/\n")], "Ignore dist");

    let first = run_template_sync(&workspace.project_path, &auto_yes(), &Output::quiet()).unwrap();
    assert!(first.success);
    workspace.project_commit(&[], "Record sync");

    let second = run_template_sync(&workspace.project_path, &auto_yes(), &Output::quiet()).unwrap();
    assert!(second.success);
    assert_eq!(second.message, "Project is up-to-date");
}

#[test]
fn test_conflict_is_reported_without_recording_hash() {
    let workspace = SyncWorkspace::new();
    workspace.project_commit(
        &[("pyproject.toml", "[project]\nname = \"my-lib\"\nversion = \"1.0.0\"\n")],
        "Rename project",
    );
    workspace.template_commit(
        &[("pyproject.toml", "[project]\nname = \"wizard-template\"\nversion = \"0.3.0\"\n")],
        "Bump template",
    );

    let result =
        run_template_sync(&workspace.project_path, &auto_yes(), &Output::quiet()).unwrap();

    assert!(!result.success);
    assert!(result.has_conflicts());
    assert_eq!(result.conflicts, vec!["pyproject.toml"]);
    assert_eq!(result.message, "Merge conflicts require manual resolution");

    let config = load_config(&workspace.project_path).unwrap();
    assert!(config.last_sync_commit.is_empty());
}

#[test]
fn test_dry_run_leaves_project_untouched() {
    let workspace = SyncWorkspace::new();
    workspace.template_commit(&[(".github/dependabot.yaml", "version: 2\n")], "Dependabot");
    let head_before = workspace.project_head();

    let options = SyncOptions {
        dry_run: true,
        ..Default::default()
    };
    let result = run_template_sync(&workspace.project_path, &options, &Output::quiet()).unwrap();

    assert!(result.success);
    assert_eq!(result.message, "Dry run completed successfully");
    assert_eq!(workspace.project_head(), head_before);
    assert!(!workspace.project_path.join(".github/dependabot.yaml").exists());
    assert!(load_config(&workspace.project_path)
        .unwrap()
        .last_sync_commit
        .is_empty());
}

#[test]
fn test_unrelated_histories_need_opt_in() {
    let workspace = SyncWorkspace::unrelated();

    let refused =
        run_template_sync(&workspace.project_path, &auto_yes(), &Output::quiet()).unwrap();
    assert!(!refused.success);
    assert!(refused.message.starts_with("Merge failed:"), "{}", refused.message);
    assert!(refused.conflicts.is_empty());

    let options = SyncOptions {
        assume_yes: true,
        allow_unrelated_histories: true,
        ..Default::default()
    };
    let merged = run_template_sync(&workspace.project_path, &options, &Output::quiet()).unwrap();
    assert!(merged.success, "{}", merged.message);
    assert_eq!(merged.new_files, vec![".gitignore"]);
}

#[test]
fn test_missing_templaterc_is_an_error() {
    let (_temp_dir, repo_path) = common::create_test_repo();
    let err = run_template_sync(&repo_path, &auto_yes(), &Output::quiet()).unwrap_err();
    assert!(err.to_string().contains(".templaterc file not found"));
}

#[test]
fn test_setup_template_remote_reports_each_transition() {
    let workspace = SyncWorkspace::new();
    let repo = GitRepo::from_path(&workspace.project_path).unwrap();
    let mut config = load_config(&workspace.project_path).unwrap();
    let out = Output::quiet();

    assert_eq!(setup_template_remote(&repo, &config, &out).unwrap(), RemoteSetup::Added);
    assert_eq!(
        setup_template_remote(&repo, &config, &out).unwrap(),
        RemoteSetup::Unchanged
    );

    let previous = config.repository.clone();
    config.repository = "https://example.com/moved.git".to_string();
    assert_eq!(
        setup_template_remote(&repo, &config, &out).unwrap(),
        RemoteSetup::Updated { previous }
    );
    assert_eq!(
        git(&workspace.project_path, &["remote", "get-url", "template"]),
        "https://example.com/moved.git"
    );
}

fn record_last_sync(workspace: &SyncWorkspace, value: &str) {
    write_file(
        &workspace.project_path,
        ".templaterc",
        &templaterc(&workspace.template_path, value),
    );
    commit_all(&workspace.project_path, "Record last sync");
}

#[rstest]
#[case("--output=leaked.txt")]
#[case("-p")]
#[case("HEAD~1")]
#[case("deadbeefdeadbeef")]
fn test_unusable_last_sync_commit_falls_back_to_full_listing(#[case] recorded: &str) {
    let workspace = SyncWorkspace::new();
    record_last_sync(&workspace, recorded);
    workspace.template_commit(&[(".github/workflows/ci.yaml", "name: CI\n")], "Add CI");

    let repo = GitRepo::from_path(&workspace.project_path).unwrap();
    let config: TemplateConfig = load_config(&workspace.project_path).unwrap();
    let out = Output::quiet();
    setup_template_remote(&repo, &config, &out).unwrap();
    repo.fetch("template", &config.branch).unwrap();

    let changes = get_template_changes(&repo, &config, &out).unwrap();

    assert_eq!(
        changes,
        vec![
            ".github/workflows/ci.yaml",
            "README.md",
            "pyproject.toml",
            "src/wizard_template/core.py",
        ]
    );
    assert!(!workspace.project_path.join("leaked.txt").exists());
}

#[test]
fn test_option_like_last_sync_commit_still_syncs() {
    let workspace = SyncWorkspace::new();
    record_last_sync(&workspace, "--output=leaked.txt");
    let template_head =
        workspace.template_commit(&[(".github/workflows/ci.yaml", "name: CI\n")], "Add CI");

    let result = run_template_sync(&workspace.project_path, &auto_yes(), &Output::quiet()).unwrap();

    assert!(result.success, "{}", result.message);
    assert_eq!(result.new_files, vec![".github/workflows/ci.yaml"]);
    assert!(!workspace.project_path.join("leaked.txt").exists());
    assert_eq!(
        load_config(&workspace.project_path).unwrap().last_sync_commit,
        template_head
    );
}
