use std::path::Path;

/// Paths of the live template that never reach the copier template.
pub const EXCLUDE_PATTERNS: &[&str] = &[
    ".git",
    ".github/workflows/template-sync-check.yaml.example",
    ".github/workflows/sync-copier-template.yaml.example",
    "__pycache__",
    "*.pyc",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    ".coverage",
    "htmlcov",
    "dist",
    "build",
    "*.egg-info",
    ".templaterc",
    "SOLUTION-SUMMARY.md",
    "docs/template-sync.md",
    "docs/template-sync-quickstart.md",
    "docs/template-sync-examples.md",
    "docs/copier-template-automation.md",
    "docs/copier-quickstart.md",
    "tests/test_template_sync.py",
    "tools/template-sync.py",
    "tools/generate-copier-template.py",
];

pub const BINARY_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "ico", "pdf"];

const WORKFLOWS_DIR: &str = ".github/workflows";

/// Slash-separated form of a relative path, independent of the host separator.
pub fn to_slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn matches_exclude(pattern: &str, relative: &str) -> bool {
    let file_name = relative.rsplit('/').next().unwrap_or(relative);

    match pattern.strip_prefix('*') {
        Some(suffix) => {
            relative.ends_with(suffix) || relative.split('/').any(|part| part.ends_with(suffix))
        }
        None => {
            relative == pattern
                || file_name == pattern
                || relative.split('/').any(|part| part == pattern)
        }
    }
}

/// `relative` is slash-separated and relative to the source root.
pub fn should_exclude(relative: &str) -> bool {
    EXCLUDE_PATTERNS
        .iter()
        .any(|pattern| matches_exclude(pattern, relative))
}

/// Files copied verbatim instead of being turned into `.jinja` templates.
///
/// Workflows are left alone because their `${{ }}` expressions collide with Jinja.
pub fn should_skip_templating(relative: &str) -> bool {
    let path = Path::new(relative);

    let binary = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext));
    if binary {
        return true;
    }

    if path.file_name().is_some_and(|name| name == "LICENSE") {
        return true;
    }

    relative.contains(WORKFLOWS_DIR)
}

/// Output location of a source file: the package directory becomes `{{ project_slug }}`.
pub fn output_relative_path(relative: &str) -> String {
    relative.replace("wizard_template", "{{ project_slug }}")
}
