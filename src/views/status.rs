//! Working tree status grouped into staged, unstaged and untracked paths.
//!
//! Group rows act on every path they hold; leaf rows act on their own path.

use crate::core::colors::{classification_tone, Tone};
use crate::core::entry::{Entry, StatusEntry};
use crate::core::error::Result;
use crate::core::git::{quote_paths, GitCommand};
use crate::core::git_status::Classification;
use crate::core::list::{ListEngine, Node, TreeItem};
use crate::core::parsers::StatusParser;
use crate::views::rows::{render_list, span};
use crate::views::{
    dispatch, help, DiffTarget, EnterParam, Shortcut, Transition, View, ViewContext, ViewKind,
};
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

const SHORTCUTS: &[Shortcut<StatusView>] = &[
    Shortcut {
        key: KeyCode::Char('u'),
        description: "Stage/Unstage",
        action: StatusView::toggle_stage,
    },
    Shortcut {
        key: KeyCode::Char('r'),
        description: "Refresh",
        action: StatusView::refresh_action,
    },
    Shortcut {
        key: KeyCode::Char('z'),
        description: "Discard",
        action: StatusView::discard,
    },
    Shortcut {
        key: KeyCode::Enter,
        description: "Diff",
        action: StatusView::open_diff,
    },
    Shortcut {
        key: KeyCode::Char('t'),
        description: "Open",
        action: StatusView::open_file,
    },
];

#[derive(Debug, Default)]
pub struct StatusView;

impl StatusView {
    pub fn new() -> Self {
        Self
    }

    /// Reload the groups and select the row at `index`, clamped.
    fn refresh(&mut self, ctx: &mut ViewContext<'_>, index: usize) -> Result<()> {
        let lists = StatusParser::parse(&ctx.repo.exec(&GitCommand::status())?);

        let groups = Classification::ALL
            .iter()
            .map(|&classification| {
                let children = lists
                    .group(classification)
                    .iter()
                    .enumerate()
                    .map(|(offset, entry)| {
                        TreeItem::leaf(
                            classification.first_child_id() + offset as i64,
                            entry.display_path(),
                            Entry::Status(entry.clone()),
                        )
                    })
                    .collect();
                TreeItem::group(classification.group_id(), classification.title(), children)
            })
            .collect();

        ctx.list.set(groups);
        ctx.list.expand_all();
        ctx.list.select_index(index);
        Ok(())
    }

    fn refresh_in_place(&mut self, ctx: &mut ViewContext<'_>) -> Result<()> {
        let index = ctx.list.selected_index().unwrap_or(0);
        self.refresh(ctx, index)
    }

    fn toggle_stage(&mut self, ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        let Some((classification, paths)) = target(ctx.list, node) else {
            return Ok(Transition::Stay);
        };

        let command = match classification {
            Classification::Staged => GitCommand::reset(&paths),
            Classification::Unstaged | Classification::Untracked => GitCommand::add(&paths),
        };
        ctx.run(&command)?;
        self.refresh_in_place(ctx)?;
        Ok(Transition::Stay)
    }

    fn refresh_action(&mut self, ctx: &mut ViewContext<'_>, _node: &Node) -> Result<Transition> {
        self.refresh_in_place(ctx)?;
        Ok(Transition::Stay)
    }

    fn discard(&mut self, ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        let Some((classification, paths)) = target(ctx.list, node) else {
            return Ok(Transition::Stay);
        };

        let command = match classification {
            Classification::Unstaged => GitCommand::checkout_paths(&paths),
            Classification::Untracked => GitCommand::clean(&paths),
            Classification::Staged => return Ok(Transition::Stay),
        };

        if !ctx.host.confirm(
            "Warning",
            &format!("Discard {}?", node.label),
            "Discard",
            "Cancel",
        ) {
            return Ok(Transition::Stay);
        }

        ctx.run(&command)?;
        self.refresh_in_place(ctx)?;
        Ok(Transition::Stay)
    }

    fn open_diff(&mut self, _ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        let Some(entry) = leaf(node) else {
            return Ok(Transition::Stay);
        };
        Ok(Transition::ReopenSub(
            ViewKind::Diff,
            EnterParam::Diff(DiffTarget::File {
                path: entry.path.clone(),
                previous: entry.rename_from.clone(),
                staged: entry.classification == Classification::Staged,
            }),
        ))
    }

    fn open_file(&mut self, ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        let Some(entry) = leaf(node) else {
            return Ok(Transition::Stay);
        };
        if ctx.config.is_source_file(&entry.path) {
            ctx.host.open_editor(&entry.path, 1);
        } else {
            ctx.host.reveal(&entry.path);
        }
        Ok(Transition::Stay)
    }
}

fn leaf(node: &Node) -> Option<&StatusEntry> {
    node.payload.as_ref().and_then(Entry::as_status)
}

fn group_classification(id: i64) -> Option<Classification> {
    Classification::ALL
        .into_iter()
        .find(|classification| classification.group_id() == id)
}

/// Group and quoted path argument an action on `node` applies to.
/// `None` for an empty group.
fn target(list: &ListEngine, node: &Node) -> Option<(Classification, String)> {
    if let Some(entry) = leaf(node) {
        return Some((entry.classification, quote_paths([entry.path.as_str()])));
    }

    let classification = group_classification(node.id)?;
    let paths: Vec<&str> = list
        .children(node)
        .filter_map(leaf)
        .map(|entry| entry.path.as_str())
        .collect();
    if paths.is_empty() {
        return None;
    }
    Some((classification, quote_paths(paths)))
}

impl View for StatusView {
    fn kind(&self) -> ViewKind {
        ViewKind::Status
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
        let index = match param {
            EnterParam::RowIndex(index) => index,
            _ => 0,
        };
        self.refresh(ctx, index)?;
        Ok(Transition::Stay)
    }

    fn on_double_click(&mut self, ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        self.open_file(ctx, node)
    }

    fn render(&self, frame: &mut Frame, area: Rect, list: &ListEngine, focused: bool) {
        render_list(frame, area, list, "Status", focused, |node| match leaf(node) {
            Some(entry) => Line::from(vec![
                span(
                    format!("{} ", entry.status_char()),
                    classification_tone(entry.classification),
                ),
                span(node.label.clone(), Tone::Plain),
            ]),
            None => {
                let count = node.children.len();
                Line::from(Span::styled(
                    format!("{} ({count})", node.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            }
        });
    }
}
