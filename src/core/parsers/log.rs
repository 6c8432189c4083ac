//! Parser for `git log --graph` output in the navigator's field template.
//!
//! Each commit row looks like
//! `<graph>hash={<h>} date={<d>} author={<a>} branch={<b>} commit=<subject>`.
//! Fields are read positionally: each `key={` is searched after the previous
//! closing `}`, and `commit=` takes the rest of the line.

use crate::core::entry::LogEntry;
use crate::core::parsers::non_empty_lines;

const HASH_MARKER: &str = "hash={";

pub struct LogParser;

impl LogParser {
    pub fn parse(text: &str) -> Vec<LogEntry> {
        non_empty_lines(text).map(Self::parse_line).collect()
    }

    /// Parse one row. Rows without a commit marker become graph-only entries.
    pub fn parse_line(line: &str) -> LogEntry {
        let Some(start) = line.find(HASH_MARKER) else {
            return LogEntry {
                raw_graph_prefix: line.to_string(),
                ..LogEntry::default()
            };
        };

        let mut rest = &line[start..];
        let short_hash = take_field(&mut rest, HASH_MARKER);
        let iso_date = take_field(&mut rest, "date={");
        let author = take_field(&mut rest, "author={");
        let ref_decoration = take_field(&mut rest, "branch={");
        let subject = rest
            .find("commit=")
            .map(|at| rest[at + "commit=".len()..].to_string())
            .unwrap_or_default();

        LogEntry {
            short_hash,
            iso_date,
            author,
            ref_decoration,
            subject,
            raw_graph_prefix: line[..start].to_string(),
        }
    }
}

/// Extract the value of `key` up to the next `}` and advance past it.
/// A missing key or delimiter yields an empty value and leaves `rest` alone.
fn take_field(rest: &mut &str, key: &str) -> String {
    let Some(begin) = rest.find(key).map(|at| at + key.len()) else {
        return String::new();
    };
    let Some(end) = rest[begin..].find('}').map(|at| at + begin) else {
        return String::new();
    };

    let value = rest[begin..end].to_string();
    *rest = &rest[end + 1..];
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_row(graph: &str, hash: &str, date: &str, author: &str, branch: &str, subject: &str) -> String {
        format!("{graph}hash={{{hash}}} date={{{date}}} author={{{author}}} branch={{{branch}}} commit={subject}")
    }

    #[test]
    fn test_parse_commit_row() {
        let line = format_row(
            "* ",
            "a1b2c3d",
            "2024-03-01 09:15:42 +0900",
            "Jane Doe",
            " (HEAD -> main, origin/main)",
            "Fix parser",
        );
        let entry = LogParser::parse_line(&line);

        assert_eq!(entry.raw_graph_prefix, "* ");
        assert_eq!(entry.short_hash, "a1b2c3d");
        assert_eq!(entry.iso_date, "2024-03-01 09:15:42 +0900");
        assert_eq!(entry.author, "Jane Doe");
        assert_eq!(entry.ref_decoration, " (HEAD -> main, origin/main)");
        assert_eq!(entry.subject, "Fix parser");
        assert!(entry.is_commit());
    }

    #[test]
    fn test_fields_round_trip() {
        let cases = [
            ("| * ", "0000000", "2020-01-01 00:00:00 +0000", "A", "", ""),
            ("* ", "fff1234", "2023-12-31 23:59:59 -0700", "Ünïcødé Author", " (tag: v1.0)", "subject with = and { braces"),
            ("", "1234567", "2021-06-15 12:00:00 +0200", "x y z", "", "commit=looks like a field"),
        ];

        for (graph, hash, date, author, branch, subject) in cases {
            let line = format_row(graph, hash, date, author, branch, subject);
            let entry = LogParser::parse_line(&line);
            assert_eq!(
                (
                    entry.raw_graph_prefix.as_str(),
                    entry.short_hash.as_str(),
                    entry.iso_date.as_str(),
                    entry.author.as_str(),
                    entry.ref_decoration.as_str(),
                    entry.subject.as_str()
                ),
                (graph, hash, date, author, branch, subject)
            );
        }
    }

    #[test]
    fn test_graph_only_row() {
        let entry = LogParser::parse_line("|\\");
        assert_eq!(entry.raw_graph_prefix, "|\\");
        assert!(entry.short_hash.is_empty());
        assert!(entry.iso_date.is_empty());
        assert!(entry.author.is_empty());
        assert!(entry.ref_decoration.is_empty());
        assert!(entry.subject.is_empty());
    }

    #[test]
    fn test_malformed_row_degrades() {
        let entry = LogParser::parse_line("* hash={abc date={oops");
        assert_eq!(entry.raw_graph_prefix, "* ");
        assert!(entry.short_hash.is_empty());
        assert!(entry.subject.is_empty());

        let truncated = LogParser::parse_line("* hash={abc1234} date={2024");
        assert_eq!(truncated.short_hash, "abc1234");
        assert!(truncated.iso_date.is_empty());
    }

    #[test]
    fn test_parse_drops_empty_lines() {
        let text = format!(
            "{}\n|\n\n{}\n",
            format_row("* ", "aaaaaaa", "2024-01-02 03:04:05 +0000", "A", "", "two"),
            format_row("* ", "bbbbbbb", "2024-01-01 03:04:05 +0000", "B", "", "one"),
        );
        let entries = LogParser::parse(&text);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].short_hash, "aaaaaaa");
        assert!(!entries[1].is_commit());
        assert_eq!(entries[2].subject, "one");
    }
}
