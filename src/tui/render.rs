//! Screen layout: main pane, optional sub pane, mode bar and modal dialogs.

use crate::core::git::RepoClient;
use crate::navigator::{Navigator, Slot};
use crate::views::{key_label, ViewKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub main: Rect,
    pub sub: Option<Rect>,
    pub bar: Rect,
}

impl Panes {
    pub fn new(area: Rect, has_sub: bool) -> Self {
        let [body, bar] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        if !has_sub {
            return Panes {
                main: body,
                sub: None,
                bar,
            };
        }
        let [main, sub] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
        Panes {
            main,
            sub: Some(sub),
            bar,
        }
    }

    pub fn area(&self, slot: Slot) -> Option<Rect> {
        match slot {
            Slot::Main => Some(self.main),
            Slot::Sub => self.sub,
        }
    }

    /// Slot whose pane contains the cell at `column`, `row`.
    pub fn slot_at(&self, column: u16, row: u16) -> Option<Slot> {
        let contains = |area: Rect| {
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
        };
        if contains(self.main) {
            Some(Slot::Main)
        } else if self.sub.is_some_and(contains) {
            Some(Slot::Sub)
        } else {
            None
        }
    }
}

pub fn draw<R: RepoClient>(frame: &mut Frame, navigator: &Navigator<R>) {
    let panes = Panes::new(frame.area(), navigator.sub_kind().is_some());

    for slot in [Slot::Main, Slot::Sub] {
        if let (Some(kind), Some(area)) = (navigator.kind_in(slot), panes.area(slot)) {
            let focused = navigator.focus() == slot;
            navigator
                .view(kind)
                .render(frame, area, navigator.list(slot), focused);
        }
    }

    frame.render_widget(Paragraph::new(mode_bar(navigator)), panes.bar);
}

/// `[l:Log] [s:Status] ...` with the main view bold, then the focused view's keys.
pub fn mode_bar<R: RepoClient>(navigator: &Navigator<R>) -> Line<'static> {
    let mut spans = Vec::new();
    for kind in ViewKind::ALL {
        let style = if kind == navigator.main_kind() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("[{}:{}]", key_label(kind.hotkey()), kind.display_name()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw(" "));
    let focused = navigator
        .kind_in(navigator.focus())
        .unwrap_or(navigator.main_kind());
    for (key, description) in navigator.view(focused).shortcut_help() {
        spans.push(Span::styled(
            format!("[{}:{description}]", key_label(key)),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Modal box with a message and the accepted keys in the border.
pub fn draw_dialog(frame: &mut Frame, title: &str, message: &str, buttons: &[String]) {
    let text_width = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let footer = buttons.join("  ");
    let width = (text_width.max(footer.chars().count()).max(title.chars().count()) + 4)
        .clamp(24, 80) as u16;
    let height = (message.lines().count().max(1) + 4) as u16;
    let area = centered(frame.area(), width, height);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_bottom(Line::from(format!(" {footer} ")).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(message.to_string())
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
