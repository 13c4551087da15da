//! Static files written next to the generated templates.

pub const COPIER_YML: &str = r#"# Copier template configuration
# https://copier.readthedocs.io/

# Questions to ask the user
project_name:
  type: str
  help: What is your project name (with dashes)?
  default: my-awesome-project
  validator: "{% if not project_name %}Required{% endif %}"

project_slug:
  type: str
  help: What is your project slug (with underscores, for Python package)?
  default: "{{ project_name|replace('-', '_') }}"

author_name:
  type: str
  help: What is your GitHub username or organization?
  default: myusername
  validator: "{% if not author_name %}Required{% endif %}"

author_email:
  type: str
  help: What is your email?
  default: me@example.com
  validator: "{% if not author_email %}Required{% endif %}"

project_description:
  type: str
  help: Brief description of your project
  default: A Python project based on the wizard template

# Template options
_subdirectory: ""

# Only process .jinja files with Jinja templating
# Other files are copied as-is
_templates_suffix: ".jinja"

# Tasks to run after generation (optional, users can skip with --skip-tasks)
_tasks:
  - "git init"
  - "git add ."
  - "git commit -m 'Initial commit from wizard-template'"

# Files to exclude from the template
_exclude:
  - "copier.yml"
  - "*.pyc"
  - "__pycache__"
  - ".git"
  - ".pytest_cache"
  - ".mypy_cache"
  - ".ruff_cache"
  - ".coverage"
  - "htmlcov"
  - "*.egg-info"
  - "dist"
  - "build"

# Minimum copier version
_min_copier_version: "9.0.0"
"#;

pub const README_COPIER: &str = r#"# Wizard Template - Copier Version

This is the [Copier](https://copier.readthedocs.io/) template version of the
[wizard-template](https://github.com/fschuch/wizard-template) Python project template.

## About

This template is **automatically generated** from the wizard-template repository.
The wizard-template is maintained as a working Python project with real dependencies,
CI/CD, tests, and receives automated updates from dependabot and pre-commit.

Changes made to wizard-template are automatically converted to this copier template
format, ensuring that template improvements and dependency updates flow downstream
to users.

## Usage

### Create a new project

```bash
# Install copier
pip install copier

# Create a new project from this template
copier copy https://github.com/fschuch/wizard-template-copier my-project

# Or from a local clone
copier copy . /path/to/my-project
```

You'll be prompted for:
- Project name (with dashes, e.g., `my-awesome-project`)
- Project slug (with underscores, e.g., `my_awesome_project`)
- Author name (GitHub username)
- Author email
- Project description

### Update an existing project

```bash
# Update your project with the latest template
cd my-project
copier update
```

## Features

This template includes:

- 🚀 **Modern Python Setup**: Uses `hatchling` for building and `hatch` for development
- ✅ **Quality Assurance**: Pre-configured linting (ruff), type checking (mypy), and testing (pytest)
- 📚 **Documentation**: Automated documentation with Jupyter Book
- 🤖 **CI/CD**: GitHub Actions workflows for testing, building, and deployment
- 📦 **Dependency Management**: Dependabot configuration for automated updates
- 🎯 **Pre-commit Hooks**: Automated code quality checks
- 🔒 **Security**: CodeQL analysis and zizmor security scanning

## Source Repository

This copier template is generated from:
https://github.com/fschuch/wizard-template

To contribute or report issues, please use the main wizard-template repository.

## Maintenance

**Do not manually edit files in this repository!**

This repository is automatically synchronized from the wizard-template source.
All changes should be made to the wizard-template repository and will be
automatically converted to copier format.

## License

MIT License - See LICENSE file for details.

© 2023 Felipe N. Schuch
"#;

pub fn generate_copier_yml() -> &'static str {
    COPIER_YML
}

pub fn generate_readme_for_copier() -> &'static str {
    README_COPIER
}
