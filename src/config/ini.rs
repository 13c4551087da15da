//! Minimal reader/writer for the INI dialect used by `.templaterc`.
//!
//! The dialect follows Python's `configparser` defaults: `=` or `:` as the
//! delimiter, lower-cased keys, full-line `#`/`;` comments, and multi-line
//! values written as indented continuation lines.

use crate::error::{Result, WizardError};

const CONTINUATION_INDENT: &str = "    ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let key = key.to_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> &mut IniSection {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(IniSection::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.section_mut(section).set(key, value);
    }
}

struct OpenValue {
    section: usize,
    entry: usize,
    indent: usize,
    lines: Vec<String>,
    pending_blank: usize,
}

fn leading_whitespace(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn close_value(doc: &mut IniDocument, open: Option<OpenValue>) {
    if let Some(open) = open {
        doc.sections[open.section].entries[open.entry].1 = open.lines.join("\n");
    }
}

pub fn parse(content: &str) -> Result<IniDocument> {
    let mut doc = IniDocument::new();
    let mut current_section: Option<usize> = None;
    let mut open: Option<OpenValue> = None;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let stripped = raw.trim();

        if stripped.starts_with('#') || stripped.starts_with(';') {
            continue;
        }

        if stripped.is_empty() {
            if let Some(value) = open.as_mut() {
                value.pending_blank += 1;
            }
            continue;
        }

        let indent = leading_whitespace(raw);

        if let Some(value) = open.as_mut() {
            if indent > value.indent {
                for _ in 0..value.pending_blank {
                    value.lines.push(String::new());
                }
                value.pending_blank = 0;
                value.lines.push(stripped.to_string());
                continue;
            }
        }
        close_value(&mut doc, open.take());

        if let Some(name) = stripped
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            let name = name.trim();
            if doc.section(name).is_some() {
                return Err(WizardError::Config(format!(
                    "Duplicate section [{}] at line {}",
                    name, line_no
                )));
            }
            doc.sections.push(IniSection::new(name));
            current_section = Some(doc.sections.len() - 1);
            continue;
        }

        let section = current_section.ok_or_else(|| {
            WizardError::Config(format!(
                "Line {} appears before any section header: {}",
                line_no, stripped
            ))
        })?;

        let delimiter = stripped.find(['=', ':']).ok_or_else(|| {
            WizardError::Config(format!("Cannot parse line {}: {}", line_no, stripped))
        })?;

        let key = stripped[..delimiter].trim().to_lowercase();
        let value = stripped[delimiter + 1..].trim().to_string();

        if key.is_empty() {
            return Err(WizardError::Config(format!(
                "Empty key at line {}",
                line_no
            )));
        }

        let entries = &mut doc.sections[section].entries;
        if entries.iter().any(|(k, _)| *k == key) {
            return Err(WizardError::Config(format!(
                "Duplicate option '{}' in section [{}] at line {}",
                key, doc.sections[section].name, line_no
            )));
        }
        entries.push((key, String::new()));

        open = Some(OpenValue {
            section,
            entry: entries.len() - 1,
            indent,
            lines: vec![value],
            pending_blank: 0,
        });
    }

    close_value(&mut doc, open);
    Ok(doc)
}

pub fn render(doc: &IniDocument) -> String {
    let mut out = String::new();

    for (index, section) in doc.sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", section.name));

        for (key, value) in &section.entries {
            let mut lines = value.split('\n');
            let first = lines.next().unwrap_or_default();
            out.push_str(format!("{} = {}", key, first).trim_end());
            out.push('\n');
            for line in lines {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(CONTINUATION_INDENT);
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
    }

    out
}
