//! Parser for `git status -s -u` porcelain lines.
//!
//! Each line is `XY <path>` where `X` is the index column and `Y` the work
//! tree column. One line is checked against every group, so `MM file` yields
//! both a staged and an unstaged entry.
//!
//! Renames read `old -> new`. The separator is matched textually, so a file
//! whose name itself contains ` -> ` is split at that point too.

use crate::core::entry::StatusEntry;
use crate::core::git_status::Classification;
use crate::core::parsers::non_empty_lines;
use serde::Serialize;

const RENAME_ARROW: &str = " -> ";

/// Parsed entries split by group, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusLists {
    pub staged: Vec<StatusEntry>,
    pub unstaged: Vec<StatusEntry>,
    pub untracked: Vec<StatusEntry>,
}

impl StatusLists {
    pub fn group(&self, classification: Classification) -> &[StatusEntry] {
        match classification {
            Classification::Staged => &self.staged,
            Classification::Unstaged => &self.unstaged,
            Classification::Untracked => &self.untracked,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty() && self.untracked.is_empty()
    }
}

pub struct StatusParser;

impl StatusParser {
    pub fn parse(text: &str) -> StatusLists {
        let mut lists = StatusLists::default();

        for line in non_empty_lines(text) {
            let Some((code, raw_path)) = split_line(line) else {
                log::debug!("Skipping short status line: {line:?}");
                continue;
            };
            let (path, rename_from) = split_rename(raw_path);

            for classification in Classification::from_code(code) {
                let entry = StatusEntry {
                    path: path.clone(),
                    rename_from: rename_from.clone(),
                    classification,
                    raw_status_code: code.to_string(),
                };
                match classification {
                    Classification::Staged => lists.staged.push(entry),
                    Classification::Unstaged => lists.unstaged.push(entry),
                    Classification::Untracked => lists.untracked.push(entry),
                }
            }
        }

        lists
    }
}

fn split_line(line: &str) -> Option<(&str, &str)> {
    let code = line.get(..2)?;
    let path = line.get(3..)?;
    if path.is_empty() {
        return None;
    }
    Some((code, path))
}

fn split_rename(raw_path: &str) -> (String, Option<String>) {
    match raw_path.split_once(RENAME_ARROW) {
        Some((from, to)) => (unquote(to), Some(unquote(from))),
        None => (unquote(raw_path), None),
    }
}

/// Undo git's C-style quoting of paths with special characters.
///
/// Octal escapes are raw bytes (`core.quotePath` writes non-ASCII that way),
/// so the path is rebuilt as bytes and decoded once at the end.
fn unquote(path: &str) -> String {
    let Some(inner) = path
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return path.to_string();
    };

    let bytes = inner.as_bytes();
    let mut unquoted = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        i += 1;
        if b != b'\\' {
            unquoted.push(b);
            continue;
        }
        let Some(&escaped) = bytes.get(i) else {
            unquoted.push(b'\\');
            break;
        };
        i += 1;
        match escaped {
            b'a' => unquoted.push(0x07),
            b'b' => unquoted.push(0x08),
            b't' => unquoted.push(b'\t'),
            b'n' => unquoted.push(b'\n'),
            b'v' => unquoted.push(0x0b),
            b'f' => unquoted.push(0x0c),
            b'r' => unquoted.push(b'\r'),
            b'0'..=b'3' => match octal_byte(bytes, i - 1) {
                Some(byte) => {
                    unquoted.push(byte);
                    i += 2;
                }
                None => unquoted.push(escaped),
            },
            other => unquoted.push(other),
        }
    }
    String::from_utf8_lossy(&unquoted).into_owned()
}

/// Byte value of the three octal digits starting at `start`.
fn octal_byte(bytes: &[u8], start: usize) -> Option<u8> {
    let digits = bytes.get(start..start + 3)?;
    digits.iter().try_fold(0u8, |value, &digit| match digit {
        b'0'..=b'7' => value.checked_mul(8)?.checked_add(digit - b'0'),
        _ => None,
    })
}
