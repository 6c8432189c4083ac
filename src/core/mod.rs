//! Core building blocks: git invocation, output parsing, the list engine,
//! configuration and error handling. Nothing here touches the terminal UI.

pub mod colors;
pub mod config;
pub mod dirs;
pub mod entry;
pub mod error;
pub mod git;
pub mod git_status;
pub mod list;
pub mod output;
pub mod parsers;

// === Error handling ===
pub use error::{GitPanesError, Result};

// === Git invocation ===
// Command builders and the client that runs them
pub use git::{quote_path, quote_paths, GitCli, GitCommand, RepoClient};

// === Parsed records ===
pub use entry::{BranchEntry, DiffLine, DiffLineKind, Entry, LogEntry, StatusEntry};
pub use git_status::{Classification, GitStatus};
pub use parsers::{BranchParser, DiffParser, LogParser, StatusLists, StatusParser};

// === Selection tree ===
pub use list::{Direction, ListEngine, Node, TreeItem};

pub use config::Config;

// === Output formatting ===
pub use output::{print_error, print_info, print_json, print_section_header};
