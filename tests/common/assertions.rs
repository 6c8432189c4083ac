//! Predicates for git-panes output.

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// A `<title>:` section header from the status printer.
pub fn has_section(title: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{title}:"))
}

/// A status row: status character, space, path.
pub fn has_status_row(status: char, path: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{status} {path}"))
}

/// The `(description)` suffix of a status row.
pub fn has_status(description: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("({description})"))
}

pub fn has_current_branch(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[*] {name}"))
}

pub fn is_json() -> impl Predicate<str> {
    predicates::function::function(|out: &str| {
        serde_json::from_str::<serde_json::Value>(out.trim()).is_ok()
    })
}
