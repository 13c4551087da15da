use crate::copier::assets::{generate_copier_yml, generate_readme_for_copier};
use crate::copier::filters::{
    output_relative_path, should_exclude, should_skip_templating, to_slash_path,
};
use crate::copier::variables::TemplateRules;
use crate::error::{Result, WizardError};
use crate::output::Output;
use crate::prompt::prompt_yes_no;
use serde::Serialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub const DEFAULT_OUTPUT_DIR: &str = "../wizard-template-copier";

/// Suffix copier uses to recognise files it must render.
pub const TEMPLATE_SUFFIX: &str = ".jinja";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CopyStats {
    pub templated: usize,
    pub copied: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Replace an existing output directory without asking.
    pub force: bool,
}

fn io_context(action: &str, path: &Path, err: std::io::Error) -> WizardError {
    WizardError::Io(std::io::Error::new(
        err.kind(),
        format!("Failed to {} {}: {}", action, path.display(), err),
    ))
}

/// Copy the live template into `output_dir`, turning text files into `.jinja` templates.
///
/// `output_dir` is created when missing. When it lives inside `source_dir`
/// it is left out of the walk.
pub fn copy_template_files(source_dir: &Path, output_dir: &Path, out: &Output) -> Result<CopyStats> {
    out.line(format!(
        "Copying template files from {} to {}",
        source_dir.display(),
        output_dir.display()
    ));

    fs::create_dir_all(output_dir).map_err(|e| io_context("create", output_dir, e))?;
    let source_root = source_dir
        .canonicalize()
        .map_err(|e| io_context("resolve", source_dir, e))?;
    let output_root = output_dir
        .canonicalize()
        .map_err(|e| io_context("resolve", output_dir, e))?;

    let rules = TemplateRules::new()?;
    let mut stats = CopyStats::default();

    let walker = WalkDir::new(&source_root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.path() != output_root.as_path());

    for entry in walker {
        let entry = entry.map_err(|e| {
            WizardError::Io(std::io::Error::other(format!(
                "Failed to walk {}: {}",
                source_root.display(),
                e
            )))
        })?;
        // Symlinked files are followed like regular files; symlinked
        // directories are not descended into.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let source = entry.path();
        let relative = match source.strip_prefix(&source_root) {
            Ok(relative) => to_slash_path(relative),
            Err(_) => continue,
        };

        if should_exclude(&relative) {
            tracing::debug!("Excluded {}", relative);
            stats.skipped += 1;
            continue;
        }

        let target = output_root.join(output_relative_path(&relative));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| io_context("create", parent, e))?;
        }

        if should_skip_templating(&relative) {
            fs::copy(source, &target).map_err(|e| io_context("copy", source, e))?;
            stats.copied += 1;
            out.item(format!("Copied: {}", relative));
            continue;
        }

        let bytes = fs::read(source).map_err(|e| io_context("read", source, e))?;
        match String::from_utf8(bytes) {
            Ok(content) => {
                let file_name = source
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let templated = rules.apply(&content, &file_name);

                let mut jinja_name = target.as_os_str().to_os_string();
                jinja_name.push(TEMPLATE_SUFFIX);
                let jinja_target = Path::new(&jinja_name);
                fs::write(jinja_target, templated)
                    .map_err(|e| io_context("write", jinja_target, e))?;

                stats.templated += 1;
                out.item(format!(
                    "Templated: {} \u{2192} {}{}",
                    relative, relative, TEMPLATE_SUFFIX
                ));
            }
            Err(e) => {
                tracing::warn!("{} is not valid UTF-8: {}", relative, e);
                out.warning(format!("Could not template {}: not valid UTF-8", relative));
                fs::copy(source, &target).map_err(|e| io_context("copy", source, e))?;
                stats.copied += 1;
            }
        }
    }

    out.step("Statistics:");
    out.item(format!("Templated: {}", stats.templated));
    out.item(format!("Copied as-is: {}", stats.copied));
    out.item(format!("Skipped: {}", stats.skipped));

    Ok(stats)
}

pub fn generate_copier_template(
    source_dir: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
    out: &Output,
) -> Result<CopyStats> {
    out.line("=".repeat(70));
    out.line("Wizard Template \u{2192} Copier Template Generator");
    out.line("=".repeat(70));
    out.step(format!("Source: {}", source_dir.display()));
    out.line(format!("Output: {}", output_dir.display()));
    out.blank();

    if output_dir.exists() {
        let overwrite = options.force
            || prompt_yes_no(
                &format!("Output directory {} exists. Overwrite?", output_dir.display()),
                false,
            )?;
        if !overwrite {
            return Err(WizardError::Aborted(format!(
                "output directory {} left untouched",
                output_dir.display()
            )));
        }
        tracing::info!("Removing existing output directory {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(|e| io_context("remove", output_dir, e))?;
    }

    let stats = copy_template_files(source_dir, output_dir, out)?;

    out.step("Generating copier.yml...");
    let copier_yml = output_dir.join("copier.yml");
    fs::write(&copier_yml, generate_copier_yml())
        .map_err(|e| io_context("write", &copier_yml, e))?;
    out.item("Created: copier.yml");

    out.step("Generating README for copier template...");
    let readme = output_dir.join("README-COPIER.md");
    fs::write(&readme, generate_readme_for_copier()).map_err(|e| io_context("write", &readme, e))?;
    out.item("Created: README-COPIER.md");

    out.blank();
    out.line("=".repeat(70));
    out.line("\u{2705} Copier template generation complete!");
    out.line("=".repeat(70));
    out.step("Next steps:");
    out.line(format!(
        "1. Review the generated template in: {}",
        output_dir.display()
    ));
    out.line(format!(
        "2. Test it: copier copy {} /tmp/test-project",
        output_dir.display()
    ));
    out.line(format!(
        "3. Initialize git repo: cd {} && git init",
        output_dir.display()
    ));
    out.line("4. Push to GitHub: create repo and push");

    Ok(stats)
}
