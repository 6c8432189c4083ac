//! Type-safe porcelain status codes and change classification.
//!
//! `git status -s -u` prints two status characters per path: the index
//! column and the work tree column. [`GitStatus`] names one such character
//! and [`Classification`] says which of the three status groups a parsed
//! entry belongs to.
//!
//! # Public API
//! - [`GitStatus`]: one porcelain status character
//! - [`Classification`]: Staged, Unstaged or Untracked
//!
//! # Classification rules
//! - **Staged**: index character is one of `M A D R C U`
//! - **Unstaged**: work tree character is one of `M A D R C U`
//! - **Untracked**: index character is `?`
//!
//! A single line can qualify for more than one group (`MM`, `UU`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One porcelain status character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GitStatus {
    /// Modified file (M)
    Modified,
    /// Added/new file (A)
    Added,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Copied file (C)
    Copied,
    /// Type changed (T)
    TypeChanged,
    /// Unmerged/conflicted (U)
    Unmerged,
    /// Untracked file (?)
    Untracked,
    /// Ignored file (!)
    Ignored,
    /// Unchanged in this column (space)
    Unmodified,
}

impl GitStatus {
    pub fn from_code(code: char) -> Self {
        match code {
            'M' => GitStatus::Modified,
            'A' => GitStatus::Added,
            'D' => GitStatus::Deleted,
            'R' => GitStatus::Renamed,
            'C' => GitStatus::Copied,
            'T' => GitStatus::TypeChanged,
            'U' => GitStatus::Unmerged,
            '?' => GitStatus::Untracked,
            '!' => GitStatus::Ignored,
            _ => GitStatus::Unmodified,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            GitStatus::Modified => 'M',
            GitStatus::Added => 'A',
            GitStatus::Deleted => 'D',
            GitStatus::Renamed => 'R',
            GitStatus::Copied => 'C',
            GitStatus::TypeChanged => 'T',
            GitStatus::Unmerged => 'U',
            GitStatus::Untracked => '?',
            GitStatus::Ignored => '!',
            GitStatus::Unmodified => ' ',
        }
    }

    /// Whether this character marks a change that can be staged or unstaged.
    pub fn is_change(&self) -> bool {
        matches!(
            self,
            GitStatus::Modified
                | GitStatus::Added
                | GitStatus::Deleted
                | GitStatus::Renamed
                | GitStatus::Copied
                | GitStatus::Unmerged
        )
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self {
            GitStatus::Modified => "modified",
            GitStatus::Added => "new",
            GitStatus::Deleted => "deleted",
            GitStatus::Renamed => "renamed",
            GitStatus::Copied => "copied",
            GitStatus::TypeChanged => "type changed",
            GitStatus::Unmerged => "both modified",
            GitStatus::Untracked => "untracked",
            GitStatus::Ignored => "ignored",
            GitStatus::Unmodified => "unmodified",
        }
    }
}

impl fmt::Display for GitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which status group an entry is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Staged,
    Unstaged,
    Untracked,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Staged,
        Classification::Unstaged,
        Classification::Untracked,
    ];

    /// Every group a two-character status code qualifies for, in group order.
    pub fn from_code(code: &str) -> Vec<Classification> {
        let mut chars = code.chars();
        let index = GitStatus::from_code(chars.next().unwrap_or(' '));
        let worktree = GitStatus::from_code(chars.next().unwrap_or(' '));

        let mut groups = Vec::with_capacity(2);
        if index.is_change() {
            groups.push(Classification::Staged);
        }
        if worktree.is_change() {
            groups.push(Classification::Unstaged);
        }
        if index == GitStatus::Untracked {
            groups.push(Classification::Untracked);
        }
        groups
    }

    /// Heading of the status group.
    pub fn title(&self) -> &'static str {
        match self {
            Classification::Staged => "Changes to be committed",
            Classification::Unstaged => "Changes not staged for commit",
            Classification::Untracked => "Untracked files",
        }
    }

    /// Reserved id of the group node in the status tree.
    pub fn group_id(&self) -> i64 {
        match self {
            Classification::Staged => -2,
            Classification::Unstaged => -3,
            Classification::Untracked => -4,
        }
    }

    /// First id handed to children of this group.
    pub fn first_child_id(&self) -> i64 {
        match self {
            Classification::Staged => 0,
            Classification::Unstaged => 1_000_000,
            Classification::Untracked => 10_000_000,
        }
    }

    /// Status character shown next to an entry of this group.
    pub fn status_char(&self, code: &str) -> char {
        match self {
            Classification::Staged => code.chars().next().unwrap_or(' '),
            Classification::Unstaged => code.chars().nth(1).unwrap_or(' '),
            Classification::Untracked => '?',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_status_round_trips_char() {
        for code in ['M', 'A', 'D', 'R', 'C', 'T', 'U', '?', '!', ' '] {
            assert_eq!(GitStatus::from_code(code).as_char(), code);
        }
        assert_eq!(GitStatus::from_code('x'), GitStatus::Unmodified);
    }

    #[test]
    fn test_git_status_display() {
        assert_eq!(format!("{}", GitStatus::Modified), "M");
        assert_eq!(format!("{}", GitStatus::Untracked), "?");
    }

    #[test]
    fn test_description() {
        assert_eq!(GitStatus::Modified.description(), "modified");
        assert_eq!(GitStatus::Added.description(), "new");
        assert_eq!(GitStatus::Unmerged.description(), "both modified");
    }

    #[test]
    fn test_classification_single_group() {
        assert_eq!(Classification::from_code("M "), vec![Classification::Staged]);
        assert_eq!(Classification::from_code(" M"), vec![Classification::Unstaged]);
        assert_eq!(Classification::from_code("??"), vec![Classification::Untracked]);
    }

    #[test]
    fn test_classification_both_columns() {
        assert_eq!(
            Classification::from_code("MM"),
            vec![Classification::Staged, Classification::Unstaged]
        );
        assert_eq!(
            Classification::from_code("UU"),
            vec![Classification::Staged, Classification::Unstaged]
        );
    }

    #[test]
    fn test_classification_ignores_type_change_and_ignored() {
        assert!(Classification::from_code(" T").is_empty());
        assert!(Classification::from_code("!!").is_empty());
        assert!(Classification::from_code("").is_empty());
    }

    #[test]
    fn test_status_char_per_group() {
        assert_eq!(Classification::Staged.status_char("RM"), 'R');
        assert_eq!(Classification::Unstaged.status_char("RM"), 'M');
        assert_eq!(Classification::Untracked.status_char("??"), '?');
    }

    #[test]
    fn test_group_ids_are_negative_and_distinct() {
        let ids: Vec<i64> = Classification::ALL.iter().map(|c| c.group_id()).collect();
        assert!(ids.iter().all(|id| *id < 0));
        assert_eq!(ids, vec![-2, -3, -4]);
    }
}
