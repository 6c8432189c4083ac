//! Parser for `git diff` and `git show` output.
//!
//! Lines are walked in order while tracking the file they belong to and the
//! line number they map to in the new version of that file:
//!
//! - `+++ b/<path>` switches the file and zeroes the counter
//! - `@@ -a,b +c,d @@` seeds the counter with `c - 1`
//! - any other line not starting with `-` advances the counter by one
//!
//! so added and context lines point at the line that exists after the hunk
//! is applied, while removed lines share the number of the line before them.

use crate::core::entry::{DiffLine, DiffLineKind};
use crate::core::parsers::non_empty_lines;

const NEW_FILE_MARKER: &str = "+++ b/";

impl DiffLineKind {
    /// Kind of a line, decided by its leading characters alone.
    pub fn classify(text: &str) -> Self {
        if ["+++", "---", "diff ", "Date:"]
            .iter()
            .any(|prefix| text.starts_with(prefix))
        {
            DiffLineKind::FileHeader
        } else if ["index ", "Author:", "commit "]
            .iter()
            .any(|prefix| text.starts_with(prefix))
        {
            DiffLineKind::Meta
        } else if text.starts_with('+') {
            DiffLineKind::Added
        } else if text.starts_with('-') {
            DiffLineKind::Removed
        } else if text.starts_with("@@") {
            DiffLineKind::HunkHeader
        } else if text.starts_with(' ') {
            DiffLineKind::Context
        } else {
            DiffLineKind::Header
        }
    }
}

/// Line-number bookkeeping while walking a diff.
#[derive(Debug, Clone, Default)]
pub struct DiffWalker {
    file_path: String,
    line_number: i64,
}

impl DiffWalker {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line_number: 0,
        }
    }

    pub fn step(&mut self, text: &str) -> DiffLine {
        if let Some(path) = text.strip_prefix(NEW_FILE_MARKER) {
            self.file_path = path.to_string();
            self.line_number = 0;
        } else if text.starts_with("@@") {
            // An unreadable hunk start resets to zero.
            self.line_number = hunk_new_start(text).map_or(0, |start| start - 1);
        } else if !text.starts_with('-') {
            self.line_number += 1;
        }

        DiffLine {
            text: text.to_string(),
            kind: DiffLineKind::classify(text),
            resolved_file_path: self.file_path.clone(),
            resolved_line_number: self.line_number,
        }
    }
}

pub struct DiffParser;

impl DiffParser {
    /// Parse `git diff` output for a single file.
    pub fn parse(text: &str, file_path: &str) -> Vec<DiffLine> {
        let mut walker = DiffWalker::new(file_path);
        non_empty_lines(text).map(|line| walker.step(line)).collect()
    }

    /// Parse `git show --stat` output followed by `git show` output.
    ///
    /// Stat rows point at the path left of `|`; the summary row and everything
    /// before the first `+++ b/` line point nowhere.
    pub fn parse_show(stat: &str, show: &str) -> Vec<DiffLine> {
        let mut lines: Vec<DiffLine> = non_empty_lines(stat)
            .map(|text| DiffLine {
                text: text.to_string(),
                kind: DiffLineKind::classify(text),
                resolved_file_path: stat_path(text),
                resolved_line_number: 0,
            })
            .collect();

        let mut walker = DiffWalker::default();
        lines.extend(non_empty_lines(show).map(|line| walker.step(line)));
        lines
    }
}

/// `c` from `@@ -a,b +c,d @@`, read between the `+` and the next `,`.
fn hunk_new_start(text: &str) -> Option<i64> {
    let after_plus = &text[text.find('+')? + 1..];
    let end = after_plus
        .find(|c: char| c == ',' || c.is_whitespace())
        .unwrap_or(after_plus.len());
    after_plus[..end].parse().ok()
}

fn stat_path(text: &str) -> String {
    if is_stat_summary(text) {
        return String::new();
    }
    text.split_once('|')
        .map(|(path, _)| path.trim().to_string())
        .unwrap_or_default()
}

fn is_stat_summary(text: &str) -> bool {
    text.contains("file changed,") || text.contains("files changed,")
}
