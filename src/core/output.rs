//! One-shot terminal messages for the non-interactive commands and for
//! errors reported outside the TUI.
//!
//! # Format
//! ```text
//!
//! ✕ Error: <message>
//!
//! ```
//! Errors are red, headers and info white, with a blank line around each.

use crate::core::error::Result;
use colored::*;
use serde::Serialize;

pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// `<header>:` followed by a blank line.
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Pretty-printed JSON on stdout, for `--json`.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_error("Test error message");
        print_info("Information message");
        print_section_header("Untracked files");
    }

    #[test]
    fn test_print_json() -> Result<()> {
        print_json(&vec!["main", "feature"])?;
        Ok(())
    }
}
