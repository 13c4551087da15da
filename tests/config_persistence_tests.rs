mod common;

use common::templaterc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wizard_template::config::{
    get_config_path, load_config, save_config, update_last_sync_commit, TemplateConfig,
};
use wizard_template::sync::should_sync_file;

#[test]
fn test_load_config_reads_all_sections() {
    let dir = TempDir::new().unwrap();
    fs::write(
        get_config_path(dir.path()),
        templaterc(Path::new("https://github.com/fschuch/wizard-template.git"), ""),
    )
    .unwrap();

    let config = load_config(dir.path()).unwrap();

    assert_eq!(config.repository, "https://github.com/fschuch/wizard-template.git");
    assert_eq!(config.branch, "main");
    assert_eq!(config.last_sync_commit, "");
    assert_eq!(config.username, "alice");
    assert_eq!(config.project_name, "my-lib");
    assert_eq!(config.exclude_paths, vec!["docs/private/*"]);
    assert!(config.sync_paths.is_empty());
    assert_eq!(config.smart_merge_files, vec!["pyproject.toml"]);
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut config = TemplateConfig::new("git@github.com:fschuch/wizard-template.git", "alice", "my-lib");
    config.branch = "develop".to_string();
    config.last_sync_commit = "0123456789abcdef0123456789abcdef01234567".to_string();
    config.exclude_paths = vec!["tests/*".to_string(), "src/*".to_string()];
    config.sync_paths = vec![".github/*".to_string()];
    config.smart_merge_files = vec!["pyproject.toml".to_string(), "README.md".to_string()];

    save_config(dir.path(), &config).unwrap();
    let loaded = load_config(dir.path()).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_update_last_sync_commit_preserves_comments() {
    let dir = TempDir::new().unwrap();
    let content = "# Template sync configuration\n\
                   [template]\n\
                   repository = https://example.com/t.git\n\
                   ; recorded by the sync tool\n\
                   last_sync_commit = abc123\n\
                   \n\
                   [project]\n\
                   username = alice\n\
                   project_name = my-lib\n";
    fs::write(get_config_path(dir.path()), content).unwrap();

    update_last_sync_commit(dir.path(), "def456").unwrap();

    let updated = fs::read_to_string(get_config_path(dir.path())).unwrap();
    assert_eq!(updated, content.replace("abc123", "def456"));
    assert_eq!(load_config(dir.path()).unwrap().last_sync_commit, "def456");
}

#[test]
fn test_missing_required_option() {
    let dir = TempDir::new().unwrap();
    fs::write(
        get_config_path(dir.path()),
        "[template]\nrepository = x\n\n[project]\nusername = alice\n",
    )
    .unwrap();

    let err = load_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains("project_name"), "{}", err);
}

#[test]
fn test_default_classification_with_empty_sync_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(
        get_config_path(dir.path()),
        templaterc(Path::new("/tmp/template"), ""),
    )
    .unwrap();
    let config = load_config(dir.path()).unwrap();

    for synced in [
        ".github/workflows/ci.yaml",
        ".pre-commit-config.yaml",
        "pyproject.toml",
        ".gitignore",
        ".vscode/settings.json",
        "docs/index.md",
    ] {
        assert!(should_sync_file(synced, &config), "{synced} should sync");
    }
    for skipped in ["README.md", "src/my_lib/core.py", "docs/private/notes.md", "LICENSE"] {
        assert!(!should_sync_file(skipped, &config), "{skipped} should be skipped");
    }
}
