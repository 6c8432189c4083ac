//! git-panes - a keyboard-driven terminal front end for git.
//!
//! A main pane and an optional sub pane each show one view (log, status,
//! branches, diff or commit). Views turn git's text output into a selectable
//! tree and map keys on the selected row to git invocations.
//!
//! # Public API
//! - [`core`]: git invocation, parsers, list engine, config and errors
//! - [`views`]: the five views and their shortcut tables
//! - [`navigator`]: main / sub slot state machine and key routing
//! - [`host`]: collaborators the navigator needs from its front end
//! - [`tui`]: the ratatui front end
//! - [`commands`]: CLI subcommand handlers

pub mod commands;
pub mod core;
pub mod host;
pub mod navigator;
pub mod tui;
pub mod views;

#[cfg(test)]
mod testing;

pub use core::{
    BranchEntry, Classification, Config, DiffLine, DiffLineKind, Entry, GitCli, GitPanesError,
    ListEngine, LogEntry, RepoClient, Result, StatusEntry,
};
pub use host::Host;
pub use navigator::{Navigator, Slot};
pub use views::{DiffTarget, EnterParam, Transition, View, ViewKind};
