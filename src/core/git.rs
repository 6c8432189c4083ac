//! Git invocation boundary.
//!
//! Views never talk to git directly: they build a command line with
//! [`GitCommand`] and hand it to a [`RepoClient`]. The production client,
//! [`GitCli`], locates the work tree with `git2` and runs each command line
//! through the platform shell in that directory.
//!
//! # Public API
//! - [`RepoClient`]: runs one command line and returns its captured text
//! - [`GitCli`]: subprocess-backed client
//! - [`GitCommand`]: builders for every command line the views issue
//! - [`quote_path`] / [`quote_paths`]: single-quote arguments for the shell
//!
//! # Output contract
//! A command that runs but exits non-zero is not an error here: its stdout
//! followed by its stderr is returned as the output. Only a failure to start
//! the process is reported as [`GitPanesError::Process`].

use crate::core::error::{GitPanesError, Result};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const LOG_FORMAT: &str = "hash={%h} date={%ad} author={%an} branch={%d} commit=%s";

/// Runs one git command line and returns what it printed.
pub trait RepoClient {
    fn exec(&self, command_line: &str) -> Result<String>;
}

pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Discover the repository containing `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).map_err(|e| {
            log::debug!("Repository discovery failed: {e}");
            GitPanesError::NotInGitRepo
        })?;
        let workdir = repo
            .workdir()
            .ok_or(GitPanesError::BareRepository)?
            .to_path_buf();

        log::debug!("Using work tree {}", workdir.display());
        Ok(GitCli { workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn shell(command_line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command_line]);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command_line]);
            cmd
        }
    }
}

impl RepoClient for GitCli {
    fn exec(&self, command_line: &str) -> Result<String> {
        log::debug!("exec: {command_line}");

        let output = Self::shell(command_line)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| GitPanesError::process_failed(command_line, e))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            log::warn!(
                "'{command_line}' exited with {}",
                output
                    .status
                    .code()
                    .map_or_else(|| "signal".to_string(), |code| code.to_string())
            );
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }
        Ok(text)
    }
}

/// Wrap `path` in single quotes unless it already is.
pub fn quote_path(path: &str) -> String {
    if path.len() >= 2 && path.starts_with('\'') && path.ends_with('\'') {
        return path.to_string();
    }
    format!("'{}'", path.replace('\'', r"'\''"))
}

/// Quote every path and join them into one space-separated argument string.
pub fn quote_paths<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .map(|path| quote_path(path.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a message for use inside a double-quoted shell argument.
fn escape_double_quoted(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builders for the command lines the views issue.
///
/// Arguments named `paths` are expected to be quoted already (see
/// [`quote_paths`]); everything else is quoted here.
pub struct GitCommand;

impl GitCommand {
    pub fn log(branch: Option<&str>, limit: usize) -> String {
        let branch = branch
            .filter(|name| !name.is_empty())
            .map(|name| format!(" {}", quote_path(name)))
            .unwrap_or_default();
        format!("git log{branch} --graph --format=\"{LOG_FORMAT}\" --date=iso -{limit}")
    }

    pub fn status() -> String {
        "git status -s -u".to_string()
    }

    pub fn show_stat(hash: &str) -> String {
        format!("git show {} --stat --pretty=\"\"", quote_path(hash))
    }

    pub fn show(hash: &str) -> String {
        format!("git show {}", quote_path(hash))
    }

    /// `git diff`, with the rename source first when there is one.
    pub fn diff(path: &str, previous: Option<&str>, staged: bool) -> String {
        let staged = if staged { " --staged" } else { "" };
        let previous = previous
            .filter(|prev| !prev.is_empty())
            .map(|prev| format!(" {}", quote_path(prev)))
            .unwrap_or_default();
        format!("git diff{staged} --{previous} {}", quote_path(path))
    }

    pub fn branches() -> String {
        "git branch -a".to_string()
    }

    pub fn add(paths: &str) -> String {
        format!("git add {paths}")
    }

    pub fn reset(paths: &str) -> String {
        format!("git reset HEAD {paths}")
    }

    pub fn checkout_paths(paths: &str) -> String {
        format!("git checkout -- {paths}")
    }

    pub fn clean(paths: &str) -> String {
        format!("git clean -fd {paths}")
    }

    pub fn checkout_branch(branch: &str) -> String {
        format!("git checkout {}", quote_path(branch))
    }

    pub fn create_branch(branch: &str) -> String {
        format!("git checkout -b {}", quote_path(branch))
    }

    pub fn stash() -> String {
        "git stash -u".to_string()
    }

    pub fn current_branch() -> String {
        "git symbolic-ref --short HEAD".to_string()
    }

    pub fn push(remote: &str, branch: &str) -> String {
        format!("git push {remote} {}", quote_path(branch))
    }

    pub fn pull_rebase(remote: &str, branch: &str) -> String {
        format!("git pull --rebase {remote} {}", quote_path(branch))
    }

    pub fn fetch_prune() -> String {
        "git fetch --prune".to_string()
    }

    pub fn commit(message: &str, amend: bool) -> String {
        let amend = if amend { " --amend" } else { "" };
        format!("git commit{amend} -m \"{}\"", escape_double_quoted(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> Result<(TempDir, GitCli)> {
        let temp_dir = TempDir::new()?;
        let repo_path = temp_dir.path();

        std::process::Command::new("git")
            .args(["init"])
            .current_dir(repo_path)
            .output()?;

        let git = GitCli::open(repo_path)?;
        Ok((temp_dir, git))
    }

    #[test]
    fn test_quote_path() {
        assert_eq!(quote_path("a.txt"), "'a.txt'");
        assert_eq!(quote_path("'already'"), "'already'");
        assert_eq!(quote_path("it's"), r"'it'\''s'");
        assert_eq!(quote_path("'"), r"''\'''");
    }

    #[test]
    fn test_quote_paths_joins_with_space() {
        assert_eq!(quote_paths(["a.txt", "b c.txt"]), "'a.txt' 'b c.txt'");
        assert_eq!(quote_paths(Vec::<String>::new()), "");
    }

    #[test]
    fn test_log_command() {
        assert_eq!(
            GitCommand::log(None, 100),
            "git log --graph --format=\"hash={%h} date={%ad} author={%an} branch={%d} commit=%s\" --date=iso -100"
        );
        assert!(GitCommand::log(Some("origin/main"), 5).starts_with("git log 'origin/main' --graph"));
        assert!(GitCommand::log(Some("origin/main"), 5).ends_with(" -5"));
    }

    #[test]
    fn test_diff_command() {
        assert_eq!(GitCommand::diff("a.txt", None, false), "git diff -- 'a.txt'");
        assert_eq!(
            GitCommand::diff("new.txt", Some("old.txt"), true),
            "git diff --staged -- 'old.txt' 'new.txt'"
        );
        assert_eq!(GitCommand::diff("a.txt", Some(""), false), "git diff -- 'a.txt'");
    }

    #[test]
    fn test_show_commands() {
        assert_eq!(
            GitCommand::show_stat("abc1234"),
            "git show 'abc1234' --stat --pretty=\"\""
        );
        assert_eq!(GitCommand::show("abc1234"), "git show 'abc1234'");
    }

    #[test]
    fn test_path_commands() {
        let paths = quote_paths(["a.txt"]);
        assert_eq!(GitCommand::add(&paths), "git add 'a.txt'");
        assert_eq!(GitCommand::reset(&paths), "git reset HEAD 'a.txt'");
        assert_eq!(GitCommand::checkout_paths(&paths), "git checkout -- 'a.txt'");
        assert_eq!(GitCommand::clean(&paths), "git clean -fd 'a.txt'");
    }

    #[test]
    fn test_commit_message_is_escaped() {
        assert_eq!(GitCommand::commit("Fix", false), "git commit -m \"Fix\"");
        assert_eq!(
            GitCommand::commit("say \"hi\" $HOME `x` \\", true),
            r#"git commit --amend -m "say \"hi\" \$HOME \`x\` \\""#
        );
    }

    #[test]
    fn test_open_outside_repo() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let result = GitCli::open(temp_dir.path().join("missing"));
        assert!(matches!(result, Err(GitPanesError::NotInGitRepo)));
        Ok(())
    }

    #[test]
    fn test_exec_status_in_fresh_repo() -> Result<()> {
        let (temp_dir, git) = setup_test_repo()?;
        std::fs::write(temp_dir.path().join("new.txt"), "content")?;

        let output = git.exec(&GitCommand::status())?;
        assert_eq!(output.trim(), "?? new.txt");
        Ok(())
    }

    #[test]
    fn test_exec_failure_returns_stderr_text() -> Result<()> {
        let (_temp_dir, git) = setup_test_repo()?;
        let output = git.exec("git checkout does-not-exist")?;
        assert!(!output.is_empty());
        Ok(())
    }
}
