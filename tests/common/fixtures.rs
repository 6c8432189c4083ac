//! Repositories in specific states, shared across test files.

#![allow(dead_code)]

use super::repository::*;

/// One file in each status group:
/// - `staged.txt` added to the index
/// - `initial.txt` modified in the work tree
/// - `notes.txt` untracked
pub fn create_mixed_status_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "staged.txt", "staged content\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "initial.txt", "initial content\nchanged line\n")?;
    create_file(&repo.path, "notes.txt", "scratch\n")?;

    Ok(repo)
}

/// Two commits on `main` plus a `feature` branch pointing at the first.
pub fn create_branched_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    git(&repo.path, &["branch", "feature"])?;

    create_file(&repo.path, "second.txt", "second\n")?;
    git_add(&repo.path, "second.txt")?;
    git_commit(&repo.path, "Add second file")?;

    Ok(repo)
}

/// `old.txt` committed, then renamed to `new.txt` in the index.
pub fn create_renamed_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "old.txt", "one\ntwo\nthree\nfour\nfive\n")?;
    git_add(&repo.path, "old.txt")?;
    git_commit(&repo.path, "Add old file")?;
    git(&repo.path, &["mv", "old.txt", "new.txt"])?;
    Ok(repo)
}
