//! Shared utilities for the git-panes integration tests.
//!
//! Every test runs the binary against a throwaway repository created with
//! the real `git` executable.

pub mod assertions;
pub mod fixtures;
pub mod repository;
