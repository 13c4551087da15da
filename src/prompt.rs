use crate::error::{Result, WizardError};
use std::io::{self, Write};

/// Ask a yes/no question. Empty input or EOF gives `default`; any answer
/// other than `y`/`yes` is a no.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    let default_hint = if default { "[Y/n]" } else { "[y/N]" };

    print!("{} {}: ", prompt, default_hint);
    io::stdout()
        .flush()
        .map_err(|e| WizardError::Config(format!("Failed to flush stdout: {}", e)))?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| WizardError::Config(format!("Failed to read input: {}", e)))?;

    // EOF: nobody is there to answer.
    if read == 0 {
        println!();
        return Ok(default);
    }

    Ok(parse_yes_no(&input, default))
}

fn parse_yes_no(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

/// Ask for a free-form value, re-asking until it is non-empty.
pub fn prompt_value(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}: ", prompt);
        stdout
            .flush()
            .map_err(|e| WizardError::Config(format!("Failed to flush stdout: {}", e)))?;

        let mut input = String::new();
        let read = stdin
            .read_line(&mut input)
            .map_err(|e| WizardError::Config(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Err(WizardError::Aborted(format!(
                "no input available for '{}'",
                prompt
            )));
        }

        let value = input.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
        println!("A value is required.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("y\n", false));
        assert!(parse_yes_no("  YES ", false));
        assert!(!parse_yes_no("n", true));
        assert!(!parse_yes_no("maybe", true));
        assert!(parse_yes_no("\n", true));
        assert!(!parse_yes_no("", false));
    }
}
