use crate::config::TemplateConfig;
use regex::Regex;

/// Prefixes synced by default when `sync_paths` is empty.
pub const DEFAULT_SYNC_PREFIXES: &[&str] = &[
    ".github/",
    ".pre-commit-config.yaml",
    "pyproject.toml",
    ".gitignore",
    ".vscode/",
    "docs/",
];

/// Translate an `fnmatch` pattern into an anchored regular expression.
///
/// `*` matches any run of characters including `/`, `?` matches one
/// character and `[!...]` negates a set. An unclosed `[` is literal.
pub fn fnmatch_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut translated = String::from(r"(?s)\A");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                translated.push_str(".*");
            }
            '?' => translated.push('.'),
            '[' => {
                let mut j = i;
                if chars.get(j) == Some(&'!') {
                    j += 1;
                }
                if chars.get(j) == Some(&']') {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    translated.push_str(r"\[");
                    continue;
                }

                let mut set = &chars[i..j];
                translated.push('[');
                if set.first() == Some(&'!') {
                    translated.push('^');
                    set = &set[1..];
                }
                for &member in set {
                    match member {
                        '\\' | '[' | ']' | '^' | '&' | '~' => {
                            translated.push('\\');
                            translated.push(member);
                        }
                        _ => translated.push(member),
                    }
                }
                translated.push(']');
                i = j + 1;
            }
            _ => translated.push_str(&regex::escape(&c.to_string())),
        }
    }

    translated.push_str(r"\z");
    translated
}

pub struct CompiledPatterns {
    patterns: Vec<Regex>,
}

impl CompiledPatterns {
    /// Compile `fnmatch`-style patterns. A pattern whose translation does not
    /// compile (e.g. a reversed range `[z-a]`) is matched literally.
    pub fn new(pattern_strings: &[String]) -> Self {
        let patterns: Vec<Regex> = pattern_strings
            .iter()
            .filter_map(|s| {
                Regex::new(&fnmatch_to_regex(s)).ok().or_else(|| {
                    tracing::warn!("Invalid glob pattern '{}', matching it literally", s);
                    Regex::new(&format!(r"\A{}\z", regex::escape(s))).ok()
                })
            })
            .collect();

        CompiledPatterns { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(path))
    }
}

/// Sync decision for template paths, compiled once per config.
pub struct SyncFilter {
    exclude: CompiledPatterns,
    include: CompiledPatterns,
}

impl SyncFilter {
    pub fn new(config: &TemplateConfig) -> Self {
        Self {
            exclude: CompiledPatterns::new(&config.exclude_paths),
            include: CompiledPatterns::new(&config.sync_paths),
        }
    }

    pub fn should_sync(&self, path: &str) -> bool {
        if self.exclude.matches(path) {
            return false;
        }

        if !self.include.is_empty() {
            return self.include.matches(path);
        }

        DEFAULT_SYNC_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
    }
}

pub fn should_sync_file(path: &str, config: &TemplateConfig) -> bool {
    SyncFilter::new(config).should_sync(path)
}
