use std::path::Path;
use wizard_template::error::Result;
use wizard_template::output::Output;
use wizard_template::prompt::prompt_value;
use wizard_template::rename::{run_rename, RenameOptions};

pub fn rename_project(root: &Path, options: RenameOptions) -> Result<()> {
    let report = run_rename(root, &options, prompt_value, &Output::default())?;
    tracing::debug!("rename report: {:?}", report);
    Ok(())
}
