//! Typed records produced by the output parsers.
//!
//! # Public API
//! - [`LogEntry`]: one `git log --graph` row
//! - [`StatusEntry`]: one path in one status group
//! - [`DiffLine`]: one line of `git diff` / `git show` output
//! - [`BranchEntry`]: one `git branch -a` row
//! - [`Entry`]: payload carried by a list node

use crate::core::git_status::{Classification, GitStatus};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub short_hash: String,
    pub iso_date: String,
    pub author: String,
    pub ref_decoration: String,
    pub subject: String,
    pub raw_graph_prefix: String,
}

impl LogEntry {
    /// Graph connector rows carry no commit.
    pub fn is_commit(&self) -> bool {
        !self.short_hash.is_empty()
    }

    pub fn committed_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.iso_date, "%Y-%m-%d %H:%M:%S %z").ok()
    }

    /// Date without the UTC offset, as shown in the log columns.
    pub fn display_date(&self) -> String {
        match self.committed_at() {
            Some(date) => date.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.iso_date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Path as shown and passed to git (the destination for renames).
    pub path: String,
    /// Source path of a rename, used as the previous path for `git diff`.
    pub rename_from: Option<String>,
    pub classification: Classification,
    /// The two porcelain status characters.
    pub raw_status_code: String,
}

impl StatusEntry {
    pub fn status_char(&self) -> char {
        self.classification.status_char(&self.raw_status_code)
    }

    pub fn status(&self) -> GitStatus {
        GitStatus::from_code(self.status_char())
    }

    pub fn display_path(&self) -> String {
        match &self.rename_from {
            Some(from) => format!("{from} -> {}", self.path),
            None => self.path.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffLineKind {
    Header,
    FileHeader,
    HunkHeader,
    Added,
    Removed,
    Context,
    Meta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub text: String,
    pub kind: DiffLineKind,
    /// File the line belongs to; empty when the line has no file.
    pub resolved_file_path: String,
    /// Line in the new version of the file this row maps to.
    pub resolved_line_number: i64,
}

impl DiffLine {
    pub fn has_target(&self) -> bool {
        !self.resolved_file_path.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchEntry {
    pub name: String,
    pub is_remote: bool,
    pub is_current: bool,
}

impl BranchEntry {
    /// Ref to hand to git. A symbolic row such as `origin/HEAD -> origin/main`
    /// resolves to the branch it points at.
    pub fn ref_name(&self) -> &str {
        self.name
            .split_once(" -> ")
            .map_or(self.name.as_str(), |(_, target)| target)
    }
}

/// Payload of a list node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    Log(LogEntry),
    Status(StatusEntry),
    Diff(DiffLine),
    Branch(BranchEntry),
}

impl Entry {
    pub fn as_log(&self) -> Option<&LogEntry> {
        match self {
            Entry::Log(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_status(&self) -> Option<&StatusEntry> {
        match self {
            Entry::Status(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_diff(&self) -> Option<&DiffLine> {
        match self {
            Entry::Diff(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_branch(&self) -> Option<&BranchEntry> {
        match self {
            Entry::Branch(entry) => Some(entry),
            _ => None,
        }
    }
}
