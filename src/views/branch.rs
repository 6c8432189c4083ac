//! Local and remote branches: switch, fetch, browse history and create.

use crate::core::colors::branch_tone;
use crate::core::entry::{BranchEntry, Entry};
use crate::core::error::{GitPanesError, Result};
use crate::core::git::GitCommand;
use crate::core::list::{ListEngine, Node, TreeItem};
use crate::core::parsers::{BranchParser, StatusParser};
use crate::views::rows::{inner, render_list, tone_style};
use crate::views::{dispatch, help, EnterParam, Shortcut, Transition, View, ViewContext, ViewKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SHORTCUTS: &[Shortcut<BranchView>] = &[
    Shortcut {
        key: KeyCode::Char('w'),
        description: "Switch",
        action: BranchView::switch,
    },
    Shortcut {
        key: KeyCode::Char('r'),
        description: "Fetch",
        action: BranchView::fetch,
    },
    Shortcut {
        key: KeyCode::Enter,
        description: "Log",
        action: BranchView::open_log,
    },
    Shortcut {
        key: KeyCode::Char('n'),
        description: "New branch",
        action: BranchView::start_new_branch,
    },
];

#[derive(Debug, Default)]
pub struct BranchView {
    /// Name being typed for a new branch.
    new_branch: Option<String>,
}

impl BranchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_branch_name(&self) -> Option<&str> {
        self.new_branch.as_deref()
    }

    fn load(&mut self, ctx: &mut ViewContext<'_>) -> Result<()> {
        let branches = BranchParser::parse(&ctx.repo.exec(&GitCommand::branches())?);
        ctx.list.set(
            branches
                .into_iter()
                .enumerate()
                .map(|(index, branch)| {
                    let label = branch.name.clone();
                    TreeItem::leaf(index as i64, label, Entry::Branch(branch))
                })
                .collect(),
        );
        ctx.list.select_index(0);
        Ok(())
    }

    fn switch(&mut self, ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        let Some(branch) = entry(node) else {
            return Ok(Transition::Stay);
        };
        if branch.is_current {
            return Ok(Transition::Stay);
        }

        let status = StatusParser::parse(&ctx.repo.exec(&GitCommand::status())?);
        if !status.is_clean() {
            if !ctx.host.confirm(
                "Warning",
                "There is a diff, want to switch branch?",
                "Yes",
                "No",
            ) {
                return Ok(Transition::Stay);
            }
            let output = ctx.run(&GitCommand::stash())?;
            ctx.host.notify("Info", output.trim_end());
        } else if !ctx.host.confirm(
            "Info",
            &format!("Switch {}?", branch.name),
            "Yes",
            "No",
        ) {
            return Ok(Transition::Stay);
        }

        ctx.run(&GitCommand::checkout_branch(branch.ref_name()))?;
        self.load(ctx)?;
        Ok(Transition::Stay)
    }

    fn fetch(&mut self, ctx: &mut ViewContext<'_>, _node: &Node) -> Result<Transition> {
        ctx.run(&GitCommand::fetch_prune())?;
        self.load(ctx)?;
        Ok(Transition::Stay)
    }

    fn open_log(&mut self, _ctx: &mut ViewContext<'_>, node: &Node) -> Result<Transition> {
        match entry(node) {
            Some(branch) => Ok(Transition::ReopenSub(
                ViewKind::Log,
                EnterParam::Branch(branch.ref_name().to_string()),
            )),
            None => Ok(Transition::Stay),
        }
    }

    fn start_new_branch(&mut self, _ctx: &mut ViewContext<'_>, _node: &Node) -> Result<Transition> {
        self.new_branch = Some(String::new());
        Ok(Transition::Stay)
    }

    fn create_branch(&mut self, ctx: &mut ViewContext<'_>) -> Result<()> {
        let typed = self.new_branch.take().unwrap_or_default();
        let typed = typed.trim();
        let name = typed
            .strip_prefix(&ctx.config.remote_prefix())
            .unwrap_or(typed);
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(GitPanesError::invalid_branch_name(name));
        }

        ctx.run(&GitCommand::create_branch(name))?;
        self.load(ctx)
    }
}

fn entry(node: &Node) -> Option<&BranchEntry> {
    node.payload.as_ref().and_then(Entry::as_branch)
}

impl View for BranchView {
    fn kind(&self) -> ViewKind {
        ViewKind::Branch
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

    fn on_enter(&mut self, ctx: &mut ViewContext<'_>, _param: EnterParam) -> Result<Transition> {
        self.new_branch = None;
        self.load(ctx)?;
        Ok(Transition::Stay)
    }

    fn on_exit(&mut self) {
        self.new_branch = None;
    }

    fn is_locked(&self) -> bool {
        self.new_branch.is_some()
    }

    fn on_input(
        &mut self,
        key: KeyEvent,
        ctx: &mut ViewContext<'_>,
    ) -> Result<Option<Transition>> {
        let Some(name) = self.new_branch.as_mut() else {
            return Ok(None);
        };

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                name.push(c);
            }
            KeyCode::Backspace => {
                name.pop();
            }
            KeyCode::Esc => self.new_branch = None,
            KeyCode::Enter => self.create_branch(ctx)?,
            _ => return Ok(None),
        }
        Ok(Some(Transition::Stay))
    }

    fn list_area(&self, area: Rect) -> Rect {
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area)[0]
    }

    fn render(&self, frame: &mut Frame, area: Rect, list: &ListEngine, focused: bool) {
        let [list_area, prompt_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

        render_list(frame, list_area, list, "Branch", focused, |node| {
            let Some(branch) = entry(node) else {
                return Line::from(node.label.clone());
            };
            let mut style = tone_style(branch_tone(branch));
            if branch.is_current {
                style = style.add_modifier(Modifier::BOLD);
            }
            let marker = if branch.is_current { "* " } else { "  " };
            Line::from(Span::styled(format!("{marker}{}", branch.name), style))
        });

        let prompt = match &self.new_branch {
            Some(name) => Line::from(vec![
                Span::styled("New branch: ", Style::default().fg(Color::Cyan)),
                Span::raw(format!("{name}_")),
            ]),
            None => Line::from(Span::styled(
                "n: new branch",
                Style::default().fg(Color::DarkGray),
            )),
        };
        let prompt_area = Rect {
            x: inner(list_area).x,
            width: inner(list_area).width,
            ..prompt_area
        };
        frame.render_widget(Paragraph::new(prompt), prompt_area);
    }
}
