use std::fmt::Display;

/// Console reporter shared by the long-running commands.
///
/// Progress text goes to stdout unless the reporter is quiet, which the CLI
/// uses when stdout carries machine-readable output instead. Warnings and
/// errors always go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn line(&self, message: impl Display) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    pub fn blank(&self) {
        if !self.quiet {
            println!();
        }
    }

    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("{}", title);
            println!("{}", "=".repeat(50));
        }
    }

    pub fn separator(&self) {
        if !self.quiet {
            println!();
            println!("{}", "=".repeat(50));
        }
    }

    pub fn step(&self, message: impl Display) {
        if !self.quiet {
            println!();
            println!("{}", message);
        }
    }

    pub fn item(&self, message: impl Display) {
        if !self.quiet {
            println!("   {}", message);
        }
    }

    pub fn success(&self, message: impl Display) {
        if !self.quiet {
            println!("   \u{2713} {}", message);
        }
    }

    pub fn warning(&self, message: impl Display) {
        eprintln!("   \u{26a0} {}", message);
    }
}
