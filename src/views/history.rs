//! Commit history with graph, and the push / pull actions.

use crate::core::colors::{Tone, LOG_COLUMN_TONES};
use crate::core::entry::{Entry, LogEntry};
use crate::core::error::Result;
use crate::core::git::GitCommand;
use crate::core::list::{ListEngine, Node, TreeItem};
use crate::core::parsers::{LogParser, StatusParser};
use crate::views::rows::{render_list, span};
use crate::views::{
    dispatch, help, DiffTarget, EnterParam, Shortcut, Transition, View, ViewContext, ViewKind,
};
use crossterm::event::KeyCode;
use ratatui::{layout::Rect, text::Line, Frame};

const SHORTCUTS: &[Shortcut<LogView>] = &[
    Shortcut {
        key: KeyCode::Enter,
        description: "Diff",
        action: LogView::open_diff,
    },
    Shortcut {
        key: KeyCode::Char('r'),
        description: "Reload",
        action: LogView::reload,
    },
    Shortcut {
        key: KeyCode::Char('p'),
        description: "Push",
        action: LogView::push,
    },
    Shortcut {
        key: KeyCode::Char('u'),
        description: "Pull",
        action: LogView::pull,
    },
];

#[derive(Debug, Default)]
pub struct LogView {
    branch: Option<String>,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Branch the history is filtered to.
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    fn load(&mut self, ctx: &mut ViewContext<'_>) -> Result<()> {
        let output = ctx.repo.exec(&GitCommand::log(
            self.branch.as_deref(),
            ctx.config.log_limit,
        ))?;
        let entries = LogParser::parse(&output);
        log::debug!("Loaded {} log rows", entries.len());

        ctx.list.set(
            entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    let label = entry.short_hash.clone();
                    TreeItem::leaf(index as i64, label, Entry::Log(entry))
                })
                .collect(),
        );
        Ok(())
    }

    fn open_diff(&mut self, _ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        match node.payload.as_ref().and_then(Entry::as_log) {
            Some(entry) if entry.is_commit() => Ok(Transition::ReopenSub(
                ViewKind::Diff,
                EnterParam::Diff(DiffTarget::Commit {
                    hash: entry.short_hash.clone(),
                }),
            )),
            _ => Ok(Transition::Stay),
        }
    }

    fn reload(&mut self, ctx: &mut ViewContext<'_>, _node: &Node) -> Result<Transition> {
        self.load(ctx)?;
        Ok(Transition::Stay)
    }

    fn push(&mut self, ctx: &mut ViewContext<'_>, _node: &Node) -> Result<Transition> {
        let Some(branch) = current_branch(ctx)? else {
            ctx.host.notify("Push", "Not on a branch");
            return Ok(Transition::Stay);
        };

        let remote = ctx.config.remote.clone();
        if !ctx.host.confirm(
            "Push",
            &format!("Push {branch} to {remote}?"),
            "Yes",
            "No",
        ) {
            return Ok(Transition::Stay);
        }

        ctx.run(&GitCommand::push(&remote, &branch))?;
        self.load(ctx)?;
        Ok(Transition::Stay)
    }

    fn pull(&mut self, ctx: &mut ViewContext<'_>, _node: &Node) -> Result<Transition> {
        let Some(branch) = current_branch(ctx)? else {
            ctx.host.notify("Pull", "Not on a branch");
            return Ok(Transition::Stay);
        };

        if branch.starts_with(&ctx.config.remote_prefix()) {
            ctx.host
                .notify("Pull", &format!("{branch} is a remote branch"));
            return Ok(Transition::Stay);
        }

        let status = StatusParser::parse(&ctx.repo.exec(&GitCommand::status())?);
        if !status.is_clean() {
            if !ctx.host.confirm(
                "Warning",
                "There is a diff, stash it before rebasing?",
                "Yes",
                "No",
            ) {
                return Ok(Transition::Stay);
            }
            let output = ctx.run(&GitCommand::stash())?;
            ctx.host.notify("Info", output.trim_end());
        }

        let remote = ctx.config.remote.clone();
        ctx.run(&GitCommand::pull_rebase(&remote, &branch))?;
        self.load(ctx)?;
        Ok(Transition::Stay)
    }
}

/// Name of the checked out branch, `None` when HEAD is detached.
pub(crate) fn current_branch(ctx: &ViewContext<'_>) -> Result<Option<String>> {
    let output = ctx.repo.exec(&GitCommand::current_branch())?;
    let name = output.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Ok(None);
    }
    Ok(Some(name.to_string()))
}

fn columns(entry: &LogEntry) -> [String; 6] {
    if !entry.is_commit() {
        return [
            entry.raw_graph_prefix.clone(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ];
    }
    [
        entry.raw_graph_prefix.clone(),
        entry.short_hash.clone(),
        entry.display_date(),
        entry.author.clone(),
        entry.subject.clone(),
        entry.ref_decoration.clone(),
    ]
}

impl View for LogView {
    fn kind(&self) -> ViewKind {
        ViewKind::Log
    }

    fn shortcut_help(&self) -> Vec<(KeyCode, &'static str)> {
        help(SHORTCUTS)
    }

    fn on_key(
        &mut self,
        key: KeyCode,
        ctx: &mut ViewContext<'_>,
        node: &Node,
    ) -> Result<Option<Transition>> {
        dispatch(SHORTCUTS, self, key, ctx, node)
    }

    fn on_enter(&mut self, ctx: &mut ViewContext<'_>, param: EnterParam) -> Result<Transition> {
        self.branch = match param {
            EnterParam::Branch(name) if !name.is_empty() => Some(name),
            _ => None,
        };
        self.load(ctx)?;
        ctx.list.select_index(0);
        Ok(Transition::Stay)
    }

    fn render(&self, frame: &mut Frame, area: Rect, list: &ListEngine, focused: bool) {
        let mut widths = [0usize; 6];
        for node in list.rows() {
            if let Some(entry) = node.payload.as_ref().and_then(Entry::as_log) {
                for (width, cell) in widths.iter_mut().zip(columns(entry)) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let title = match &self.branch {
            Some(branch) => format!("Log {branch}"),
            None => "Log".to_string(),
        };

        render_list(frame, area, list, &title, focused, |node| {
            let Some(entry) = node.payload.as_ref().and_then(Entry::as_log) else {
                return Line::from(node.label.clone());
            };
            let spans = columns(entry)
                .into_iter()
                .zip(widths)
                .zip(LOG_COLUMN_TONES)
                .filter(|((_, width), _)| *width > 0)
                .map(|((cell, width), tone)| span(format!("{cell:<width$} "), tone))
                .collect::<Vec<_>>();
            if spans.is_empty() {
                Line::from(span(node.label.clone(), Tone::Plain))
            } else {
                Line::from(spans)
            }
        });
    }
}
