//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitPanesError`] which covers every failure mode the
//! navigator can surface. It uses `thiserror` for ergonomic error definitions
//! and includes constructors for the variants that carry context.
//!
//! # Public API
//! - [`GitPanesError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitPanesError>`
//!
//! # Error Categories
//! - **Repository**: not inside a work tree, or a bare repository
//! - **Process**: a git invocation could not be started
//! - **Configuration**: reading, parsing or writing the config file
//! - **Terminal**: the interactive host failed to draw or read input
//!
//! Parsing git output never fails; malformed lines degrade to partial entries.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-panes
#[derive(Error, Debug)]
pub enum GitPanesError {
    // Repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Repository has no working directory")]
    BareRepository,

    // Process errors
    #[error("Failed to run '{command}': {source}")]
    Process {
        command: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Input errors
    #[error("Invalid branch name: '{name}'")]
    InvalidBranchName { name: String },

    // Terminal errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitPanesError
pub type Result<T> = std::result::Result<T, GitPanesError>;

impl GitPanesError {
    /// Create a process error for a git invocation that could not be spawned
    pub fn process_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            source,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_branch_name(name: impl Into<String>) -> Self {
        Self::InvalidBranchName { name: name.into() }
    }

    pub fn terminal(message: impl std::fmt::Display) -> Self {
        Self::Terminal(message.to_string())
    }
}
