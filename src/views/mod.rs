//! The swappable views the navigator shows in its main and sub slots.
//!
//! Every view wraps one parser, a rendering policy and a shortcut table.
//! Views never reach into the navigator: lifecycle hooks and shortcut
//! actions return a [`Transition`] that the navigator applies.
//!
//! # Public API
//! - [`View`]: lifecycle, input and rendering hooks
//! - [`ViewKind`]: identity, global hotkey and display name of each view
//! - [`EnterParam`] / [`DiffTarget`]: per-view entry payloads
//! - [`Shortcut`]: one row of a view's key → action table
//! - [`registry`]: the views in display order

pub mod branch;
pub mod commit;
pub mod diff;
pub mod history;
pub mod rows;
pub mod status;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::git::RepoClient;
use crate::core::list::{ListEngine, Node};
use crate::host::Host;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::fmt;

pub use branch::BranchView;
pub use commit::CommitView;
pub use diff::DiffView;
pub use history::LogView;
pub use status::StatusView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Log,
    Status,
    Branch,
    Diff,
    Commit,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Log,
        ViewKind::Status,
        ViewKind::Branch,
        ViewKind::Diff,
        ViewKind::Commit,
    ];

    /// Key that switches the main slot to this view.
    pub fn hotkey(&self) -> KeyCode {
        match self {
            ViewKind::Log => KeyCode::Char('l'),
            ViewKind::Status => KeyCode::Char('s'),
            ViewKind::Branch => KeyCode::Char('b'),
            ViewKind::Diff => KeyCode::Char('d'),
            ViewKind::Commit => KeyCode::Char('c'),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewKind::Log => "Log",
            ViewKind::Status => "Status",
            ViewKind::Branch => "Branch",
            ViewKind::Diff => "Diff",
            ViewKind::Commit => "Commit",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What the diff view should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffTarget {
    Commit {
        hash: String,
    },
    File {
        path: String,
        previous: Option<String>,
        staged: bool,
    },
}

/// Payload handed to [`View::on_enter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EnterParam {
    #[default]
    None,
    /// Log filter branch.
    Branch(String),
    Diff(DiffTarget),
    /// Status row to select after loading.
    RowIndex(usize),
}

/// Navigator change requested by a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Transition {
    #[default]
    Stay,
    SwitchMain(ViewKind, EnterParam),
    /// Open the sub slot; a no-op when it already shows that view.
    OpenSub(ViewKind, EnterParam),
    /// Close whatever the sub slot shows, then open it fresh.
    ReopenSub(ViewKind, EnterParam),
    CloseSub,
}

/// Everything a view may touch while handling an event.
pub struct ViewContext<'a> {
    pub list: &'a mut ListEngine,
    pub repo: &'a dyn RepoClient,
    pub host: &'a mut dyn Host,
    pub config: &'a Config,
}

impl ViewContext<'_> {
    /// Run a command whose output only matters for the log.
    pub fn run(&self, command_line: &str) -> Result<String> {
        let output = self.repo.exec(command_line)?;
        if !output.trim().is_empty() {
            log::info!("{command_line}: {}", output.trim_end());
        }
        Ok(output)
    }
}

pub type Action<V> = fn(&mut V, &mut ViewContext<'_>, &Node) -> Result<Transition>;

/// One entry of a view's shortcut table.
pub struct Shortcut<V> {
    pub key: KeyCode,
    pub description: &'static str,
    pub action: Action<V>,
}

/// Run the action bound to `key`, if any.
pub fn dispatch<V>(
    table: &[Shortcut<V>],
    view: &mut V,
    key: KeyCode,
    ctx: &mut ViewContext<'_>,
    node: &Node,
) -> Result<Option<Transition>> {
    match table.iter().find(|shortcut| shortcut.key == key) {
        Some(shortcut) => (shortcut.action)(view, ctx, node).map(Some),
        None => Ok(None),
    }
}

pub fn help<V>(table: &[Shortcut<V>]) -> Vec<(KeyCode, &'static str)> {
    table
        .iter()
        .map(|shortcut| (shortcut.key, shortcut.description))
        .collect()
}

pub trait View {
    fn kind(&self) -> ViewKind;

    fn hotkey(&self) -> KeyCode {
        self.kind().hotkey()
    }

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Keys and descriptions shown in the mode bar.
    fn shortcut_help(&self) -> Vec<(KeyCode, &'static str)>;

    /// Run the shortcut bound to `key` on `node`. `None` when nothing is bound.
    fn on_key(
        &mut self,
        key: KeyCode,
        ctx: &mut ViewContext<'_>,
        node: &Node,
    ) -> Result<Option<Transition>>;

    /// Repopulate the list. Called every time the view takes a slot.
    fn on_enter(&mut self, ctx: &mut ViewContext<'_>, param: EnterParam) -> Result<Transition>;

    fn on_exit(&mut self) {}

    /// While locked, global hotkeys are not routed and [`View::on_input`]
    /// sees keys first.
    fn is_locked(&self) -> bool {
        false
    }

    /// Text-editing hook for locked views. `None` lets the key continue
    /// through normal routing.
    fn on_input(
        &mut self,
        _key: KeyEvent,
        _ctx: &mut ViewContext<'_>,
    ) -> Result<Option<Transition>> {
        Ok(None)
    }

    fn on_single_click(&mut self, _ctx: &mut ViewContext<'_>, _node: &Node) -> Result<Transition> {
        Ok(Transition::Stay)
    }

    fn on_double_click(&mut self, ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        Ok(self.on_key(KeyCode::Enter, ctx, node)?.unwrap_or_default())
    }

    /// Part of `area` taken by the row list, for mapping clicks to rows.
    fn list_area(&self, area: Rect) -> Rect {
        area
    }

    fn render(&self, frame: &mut Frame, area: Rect, list: &ListEngine, focused: bool);
}

/// One instance of every view, in [`ViewKind::ALL`] order.
pub fn registry() -> Vec<Box<dyn View>> {
    let views: Vec<Box<dyn View>> = vec![
        Box::new(LogView::new()),
        Box::new(StatusView::new()),
        Box::new(BranchView::new()),
        Box::new(DiffView::new()),
        Box::new(CommitView::new()),
    ];
    debug_assert!(views
        .iter()
        .zip(ViewKind::ALL)
        .all(|(view, kind)| view.kind() == kind));
    views
}

/// Printable form of a key for the mode bar.
pub fn key_label(key: KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        other => format!("{other:?}"),
    }
}
