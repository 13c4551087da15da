//! Mirror the live template project into a Copier template.

pub mod assets;
pub mod filters;
pub mod generate;
pub mod variables;

pub use assets::{generate_copier_yml, generate_readme_for_copier};
pub use filters::{output_relative_path, should_exclude, should_skip_templating, EXCLUDE_PATTERNS};
pub use generate::{
    copy_template_files, generate_copier_template, CopyStats, GenerateOptions, DEFAULT_OUTPUT_DIR,
};
pub use variables::{apply_template_variables, TemplateRules, TemplateVariable, TEMPLATE_VARIABLES};
