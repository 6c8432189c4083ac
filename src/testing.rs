//! Scripted collaborators for unit tests.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::git::RepoClient;
use crate::core::list::ListEngine;
use crate::host::Host;
use crate::views::ViewContext;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Repo client answering from canned output and recording every command.
///
/// A command gets the response registered for exactly that command line, or
/// else the one with the longest matching prefix, or else empty output.
#[derive(Debug, Default)]
pub struct MockRepo {
    responses: Vec<(String, String)>,
    commands: RefCell<Vec<String>>,
}

impl MockRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, prefix: &str, output: &str) -> Self {
        self.responses.push((prefix.to_string(), output.to_string()));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Whether any issued command starts with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        self.commands
            .borrow()
            .iter()
            .any(|command| command.starts_with(prefix))
    }

    pub fn forget(&self) {
        self.commands.borrow_mut().clear();
    }
}

impl RepoClient for MockRepo {
    fn exec(&self, command_line: &str) -> Result<String> {
        self.commands.borrow_mut().push(command_line.to_string());

        let exact = self
            .responses
            .iter()
            .find(|(prefix, _)| prefix == command_line);
        let best = exact.or_else(|| {
            self.responses
                .iter()
                .filter(|(prefix, _)| command_line.starts_with(prefix.as_str()))
                .max_by_key(|(prefix, _)| prefix.len())
        });
        Ok(best.map(|(_, output)| output.clone()).unwrap_or_default())
    }
}

/// Host that records every request and answers confirmations from a script.
/// Unscripted confirmations are declined.
#[derive(Debug, Default)]
pub struct MockHost {
    answers: VecDeque<bool>,
    pub confirms: Vec<(String, String)>,
    pub notices: Vec<(String, String)>,
    pub opened: Vec<(String, usize)>,
    pub revealed: Vec<String>,
}

impl MockHost {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Host for MockHost {
    fn confirm(&mut self, title: &str, message: &str, _yes: &str, _no: &str) -> bool {
        self.confirms.push((title.to_string(), message.to_string()));
        self.answers.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, title: &str, message: &str) {
        self.notices.push((title.to_string(), message.to_string()));
    }

    fn open_editor(&mut self, path: &str, line: usize) {
        self.opened.push((path.to_string(), line));
    }

    fn reveal(&mut self, path: &str) {
        self.revealed.push(path.to_string());
    }
}

/// Owns everything a [`ViewContext`] borrows.
pub struct TestContext {
    pub list: ListEngine,
    pub repo: MockRepo,
    pub host: MockHost,
    pub config: Config,
}

impl TestContext {
    pub fn new(repo: MockRepo) -> Self {
        Self {
            list: ListEngine::new(),
            repo,
            host: MockHost::default(),
            config: Config::default(),
        }
    }

    pub fn ctx(&mut self) -> ViewContext<'_> {
        ViewContext {
            list: &mut self.list,
            repo: &self.repo,
            host: &mut self.host,
            config: &self.config,
        }
    }
}
