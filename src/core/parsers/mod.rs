//! Pure text → entry transforms for the git invocations the views issue.
//!
//! Every parser drops empty lines before indexing and never fails: input it
//! cannot make sense of degrades to partial entries so that a refresh always
//! produces something to show.
//!
//! # Public API
//! - [`LogParser`]: `git log --graph --format=...` rows
//! - [`StatusParser`]: `git status -s -u` lines into three groups
//! - [`DiffParser`]: `git diff` / `git show` lines with jump targets
//! - [`BranchParser`]: `git branch -a` rows

pub mod branch;
pub mod diff;
pub mod log;
pub mod status;

pub use branch::BranchParser;
pub use diff::DiffParser;
pub use self::log::LogParser;
pub use status::{StatusLists, StatusParser};

/// Lines of `text` with empty ones removed. A trailing `\r` is stripped.
pub(crate) fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
}
