//! Commit message editor over the staged paths.
//!
//! The view is locked for as long as it is shown, so every printable key
//! goes into the message.

use crate::core::colors::{classification_tone, Tone};
use crate::core::entry::Entry;
use crate::core::error::Result;
use crate::core::git::GitCommand;
use crate::core::list::{ListEngine, Node, TreeItem};
use crate::core::parsers::StatusParser;
use crate::views::rows::{render_list, span};
use crate::views::{EnterParam, Transition, View, ViewContext, ViewKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HEADER: &str = "Changes to be committed Files";

#[derive(Debug, Default)]
pub struct CommitView {
    message: String,
    amend: bool,
    staged: usize,
}

impl CommitView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn amend(&self) -> bool {
        self.amend
    }

    pub fn can_commit(&self) -> bool {
        !self.message.is_empty() && self.staged > 0
    }

    fn commit(&mut self, ctx: &mut ViewContext<'_>) -> Result<Transition> {
        if !self.can_commit() {
            return Ok(Transition::Stay);
        }
        ctx.run(&GitCommand::commit(&self.message, self.amend))?;
        Ok(Transition::SwitchMain(ViewKind::Log, EnterParam::None))
    }

    fn layout(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area)
    }
}

impl View for CommitView {
    fn kind(&self) -> ViewKind {
        ViewKind::Commit
    }

    fn shortcut_help(&self) -> Vec<(KeyCode, &'static str)> {
        vec![
            (KeyCode::Enter, "Commit"),
            (KeyCode::Tab, "Amend"),
            (KeyCode::Esc, "Cancel"),
        ]
    }

    fn on_key(
        &mut self,
        _key: KeyCode,
        _ctx: &mut ViewContext<'_>,
        _node: &Node,
    ) -> Result<Option<Transition>> {
        Ok(None)
    }

    fn on_enter(&mut self, ctx: &mut ViewContext<'_>, _param: EnterParam) -> Result<Transition> {
        self.message.clear();
        self.amend = false;

        let lists = StatusParser::parse(&ctx.repo.exec(&GitCommand::status())?);
        self.staged = lists.staged.len();
        ctx.list.set(
            lists
                .staged
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    let label = entry.display_path();
                    TreeItem::leaf(index as i64, label, Entry::Status(entry))
                })
                .collect(),
        );
        Ok(Transition::Stay)
    }

    fn on_exit(&mut self) {
        self.message.clear();
        self.amend = false;
    }

    fn is_locked(&self) -> bool {
        true
    }

    fn on_input(
        &mut self,
        key: KeyEvent,
        ctx: &mut ViewContext<'_>,
    ) -> Result<Option<Transition>> {
        let transition = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.message.push(c);
                Transition::Stay
            }
            KeyCode::Backspace => {
                self.message.pop();
                Transition::Stay
            }
            KeyCode::Tab => {
                self.amend = !self.amend;
                Transition::Stay
            }
            KeyCode::Enter => self.commit(ctx)?,
            KeyCode::Esc => Transition::SwitchMain(ViewKind::Log, EnterParam::None),
            _ => return Ok(None),
        };
        Ok(Some(transition))
    }

    fn list_area(&self, area: Rect) -> Rect {
        Self::layout(area)[1]
    }

    fn render(&self, frame: &mut Frame, area: Rect, list: &ListEngine, focused: bool) {
        let [header, files, message, buttons] = Self::layout(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                HEADER,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            header,
        );

        render_list(frame, files, list, "Commit", focused, |node| {
            match node.payload.as_ref().and_then(Entry::as_status) {
                Some(entry) => Line::from(vec![
                    span(
                        format!("{} ", entry.status_char()),
                        classification_tone(entry.classification),
                    ),
                    span(node.label.clone(), Tone::Plain),
                ]),
                None => Line::from(node.label.clone()),
            }
        });

        let amend = if self.amend { "[x]" } else { "[ ]" };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Message: ", Style::default().fg(Color::Cyan)),
                Span::raw(format!("{}_", self.message)),
                Span::raw(format!("  {amend} Amend")),
            ])),
            message,
        );

        let commit_style = if self.can_commit() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[Enter: Commit]", commit_style),
                Span::raw(" "),
                Span::raw("[Tab: Amend]"),
                Span::raw(" "),
                Span::raw("[Esc: Cancel]"),
            ])),
            buttons,
        );
    }
}
