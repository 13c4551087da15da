use crate::error::Result;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateVariable {
    pub name: &'static str,
    pub pattern: &'static str,
    pub jinja_expr: &'static str,
}

/// Placeholder values of the live template and the copier expressions replacing them.
pub const TEMPLATE_VARIABLES: &[TemplateVariable] = &[
    TemplateVariable {
        name: "username",
        pattern: r"fschuch",
        jinja_expr: "{{ project_slug }}",
    },
    TemplateVariable {
        name: "project_name",
        pattern: r"wizard-template",
        jinja_expr: "{{ project_name }}",
    },
    TemplateVariable {
        name: "project_slug",
        pattern: r"wizard_template",
        jinja_expr: "{{ project_slug }}",
    },
    TemplateVariable {
        name: "email",
        pattern: r"me@fschuch\.com",
        jinja_expr: "{{ author_email }}",
    },
    TemplateVariable {
        name: "author_name",
        pattern: r"fschuch",
        jinja_expr: "{{ author_name }}",
    },
    TemplateVariable {
        name: "description",
        pattern: r"A template for a python project containing a package, tests, docs, and CI/CD\.",
        jinja_expr: "{{ project_description }}",
    },
];

struct Rule {
    pattern: Regex,
    replacement: &'static str,
    limit: usize,
}

impl Rule {
    fn all(pattern: &str, replacement: &'static str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement,
            limit: 0,
        })
    }

    fn first(pattern: &str, replacement: &'static str) -> Result<Self> {
        Ok(Self {
            limit: 1,
            ..Self::all(pattern, replacement)?
        })
    }

    fn apply(&self, content: &str) -> String {
        self.pattern
            .replacen(content, self.limit, regex::NoExpand(self.replacement))
            .into_owned()
    }
}

const REPO_URL: &str = r"https://github\.com/fschuch/wizard-template";
const REPO_URL_JINJA: &str = "https://github.com/{{ author_name }}/{{ project_name }}";

/// Compiled substitution rules for turning live template files into Jinja templates.
pub struct TemplateRules {
    pyproject: Vec<Rule>,
    readme: Vec<Rule>,
    yaml: Vec<Rule>,
    general: Vec<Rule>,
}

impl TemplateRules {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pyproject: vec![
                Rule::all(r#"name\s*=\s*"wizard-template""#, r#"name = "{{ project_name }}""#)?,
                Rule::first(
                    r#"description\s*=\s*"[^"]*""#,
                    r#"description = "{{ project_description }}""#,
                )?,
                Rule::all(r#"\[\s*\{\s*name\s*=\s*"fschuch""#, r#"[{ name = "{{ author_name }}""#)?,
                Rule::all(r#"email\s*=\s*"me@fschuch\.com""#, r#"email = "{{ author_email }}""#)?,
                Rule::all(REPO_URL, REPO_URL_JINJA)?,
                Rule::all(
                    r"https://fschuch\.github\.io/wizard-template",
                    "https://{{ author_name }}.github.io/{{ project_name }}",
                )?,
                Rule::all(
                    r#"source\s*=\s*"src/wizard_template""#,
                    r#"source = "src/{{ project_slug }}""#,
                )?,
                Rule::all(
                    r#"version-file\s*=\s*"src/wizard_template/_version\.py""#,
                    r#"version-file = "src/{{ project_slug }}/_version.py""#,
                )?,
            ],
            readme: vec![
                Rule::all(r"# The Wizard Template for Python Projects", "# {{ project_name }}")?,
                Rule::all(REPO_URL, REPO_URL_JINJA)?,
                Rule::all(
                    r"https://docs\.fschuch\.com/wizard-template",
                    "https://{{ author_name }}.github.io/{{ project_name }}",
                )?,
                Rule::all(r"fschuch_wizard-template", "{{ author_name }}_{{ project_name }}")?,
            ],
            yaml: vec![Rule::all(REPO_URL, REPO_URL_JINJA)?],
            general: vec![
                Rule::all(r"\bwizard_template\b", "{{ project_slug }}")?,
                Rule::all(r"\bwizard-template\b", "{{ project_name }}")?,
                Rule::all(r"github\.com/fschuch/", "github.com/{{ author_name }}/")?,
                Rule::all(r"\bme@fschuch\.com\b", "{{ author_email }}")?,
            ],
        })
    }

    /// Replace hard-coded project values with Jinja variables.
    ///
    /// File-specific rules run first (keyed on the file name), then the
    /// general rules that apply to every templated file.
    pub fn apply(&self, content: &str, file_name: &str) -> String {
        let specific: &[Rule] = if file_name == "pyproject.toml" {
            &self.pyproject
        } else if file_name == "README.md" {
            &self.readme
        } else if file_name.ends_with(".yaml") || file_name.ends_with(".yml") {
            &self.yaml
        } else {
            &[]
        };

        let mut result = content.to_string();
        for rule in specific.iter().chain(self.general.iter()) {
            result = rule.apply(&result);
        }
        result
    }
}

pub fn apply_template_variables(content: &str, file_name: &str) -> Result<String> {
    Ok(TemplateRules::new()?.apply(content, file_name))
}
