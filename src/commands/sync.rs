use std::path::Path;
use wizard_template::error::Result;
use wizard_template::output::Output;
use wizard_template::sync::{run_template_sync, SyncOptions};

/// Returns the process exit code: 0 when the sync succeeded, was a dry run
/// or was declined before anything changed.
pub fn template_sync(root: &Path, options: SyncOptions, json: bool) -> Result<i32> {
    let out = Output::new(json);
    let result = run_template_sync(root, &options, &out)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(result.exit_code())
}
