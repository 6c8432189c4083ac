//! Parser for `git branch -a`.
//!
//! Rows carry a two-character marker (`* ` for the checked-out branch, two
//! spaces otherwise); remote-tracking branches are listed as
//! `remotes/<remote>/<name>`.

use crate::core::entry::BranchEntry;
use crate::core::parsers::non_empty_lines;

const REMOTES_PREFIX: &str = "remotes/";

pub struct BranchParser;

impl BranchParser {
    pub fn parse(text: &str) -> Vec<BranchEntry> {
        non_empty_lines(text)
            .filter_map(Self::parse_line)
            .collect()
    }

    pub fn parse_line(line: &str) -> Option<BranchEntry> {
        let is_current = line.starts_with('*');
        let raw_name = line.get(2..).unwrap_or_default().trim();
        if raw_name.is_empty() {
            return None;
        }

        let (name, is_remote) = match raw_name.strip_prefix(REMOTES_PREFIX) {
            Some(name) => (name, true),
            None => (raw_name, false),
        };

        Some(BranchEntry {
            name: name.to_string(),
            is_remote,
            is_current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_and_remote() {
        let text = "* main\n  feature/x\n  remotes/origin/HEAD -> origin/main\n  remotes/origin/main\n";
        let branches = BranchParser::parse(text);

        assert_eq!(branches.len(), 4);
        assert_eq!(
            branches[0],
            BranchEntry {
                name: "main".to_string(),
                is_remote: false,
                is_current: true
            }
        );
        assert_eq!(branches[1].name, "feature/x");
        assert!(!branches[1].is_current);
        assert!(!branches[1].is_remote);
        assert_eq!(branches[2].name, "origin/HEAD -> origin/main");
        assert!(branches[2].is_remote);
        assert_eq!(branches[3].name, "origin/main");
        assert!(branches[3].is_remote);
    }

    #[test]
    fn test_detached_head_is_current() {
        let branches = BranchParser::parse("* (HEAD detached at 1a2b3c4)\n  main\n");
        assert!(branches[0].is_current);
        assert_eq!(branches[0].name, "(HEAD detached at 1a2b3c4)");
    }

    #[test]
    fn test_local_branch_named_like_remote_is_not_remote() {
        let branches = BranchParser::parse("  origin/topic\n");
        assert_eq!(branches[0].name, "origin/topic");
        assert!(!branches[0].is_remote);
    }

    #[test]
    fn test_empty_and_marker_only_lines_are_dropped() {
        assert!(BranchParser::parse("\n* \n  \n").is_empty());
    }
}
