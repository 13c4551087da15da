use std::path::{Path, PathBuf};
use wizard_template::copier::{generate_copier_template, GenerateOptions, TEMPLATE_VARIABLES};
use wizard_template::error::Result;
use wizard_template::output::Output;

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

pub fn list_variables() {
    println!("Template variables:");
    for variable in TEMPLATE_VARIABLES {
        println!(
            "  {:<14} {:<20} -> {}",
            variable.name, variable.pattern, variable.jinja_expr
        );
    }
}

pub fn generate(cwd: &Path, source_dir: &Path, output_dir: &Path, force: bool) -> Result<()> {
    let source = absolute(cwd, source_dir);
    let output = absolute(cwd, output_dir);

    let options = GenerateOptions { force };
    let stats = generate_copier_template(&source, &output, &options, &Output::default())?;
    tracing::info!(
        "copier template written: {} templated, {} copied, {} skipped",
        stats.templated,
        stats.copied,
        stats.skipped
    );
    Ok(())
}
