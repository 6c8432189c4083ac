//! Throwaway git repositories and a preconfigured command for the binary.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A repository under `<temp>/repo` with its own config home under
/// `<temp>/config`, so the binary never touches the user's files. The
/// TempDir must stay alive for the duration of the test.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config_home(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    /// `git-panes` running inside the repository, colors off.
    pub fn panes(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("git-panes")?;
        cmd.current_dir(&self.path)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }
}

/// Run git in `repo_path`, failing the test when git reports an error.
pub fn git(repo_path: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Fresh repository on an unborn `main` branch with a test identity.
pub fn setup_test_repo() -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("repo");
    fs::create_dir(&path)?;

    git(&path, &["init"])?;
    git(&path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;
    git(&path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo { temp_dir, path })
}

/// Repository whose history holds one commit adding `initial.txt`.
pub fn setup_test_repo_with_initial_commit() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;
    Ok(repo)
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> anyhow::Result<()> {
    let file = repo_path.join(filename);
    if let Some(dir) = file.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(file, content)?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> anyhow::Result<()> {
    git(repo_path, &["add", filename])?;
    Ok(())
}

pub fn git_commit(repo_path: &Path, message: &str) -> anyhow::Result<()> {
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Short hash of HEAD.
pub fn head_hash(repo_path: &Path) -> anyhow::Result<String> {
    Ok(git(repo_path, &["rev-parse", "--short", "HEAD"])?.trim().to_string())
}
