//! Event loop of the interactive navigator.

use crate::core::error::{GitPanesError, Result};
use crate::core::git::RepoClient;
use crate::navigator::{Navigator, Slot};
use crate::tui::host::TerminalHost;
use crate::tui::render::{self, Panes};
use crate::views::rows::row_at;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Detects a second click on the same row within [`DOUBLE_CLICK`].
#[derive(Debug, Default)]
pub struct ClickTracker {
    last: Option<(Slot, usize, Instant)>,
}

impl ClickTracker {
    /// Record a click and report whether it completes a double click.
    pub fn click(&mut self, slot: Slot, row: usize, at: Instant) -> bool {
        let double = matches!(
            self.last,
            Some((last_slot, last_row, when))
                if last_slot == slot && last_row == row && at.duration_since(when) <= DOUBLE_CLICK
        );
        self.last = if double { None } else { Some((slot, row, at)) };
        double
    }
}

pub fn run_loop<R: RepoClient>(host: &mut TerminalHost, navigator: &mut Navigator<R>) -> Result<()> {
    let mut clicks = ClickTracker::default();
    let mut area = Rect::default();

    loop {
        let completed = host
            .terminal_mut()
            .draw(|frame| {
                area = frame.area();
                render::draw(frame, navigator);
            })
            .map_err(GitPanesError::terminal)?;
        let backdrop = completed.buffer.clone();
        host.set_backdrop(backdrop);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    log::info!("Quit requested");
                    return Ok(());
                }
                navigator.handle_key(key, host);
            }
            Event::Mouse(mouse) => handle_mouse(mouse, area, navigator, host, &mut clicks),
            _ => {}
        }
    }
}

fn handle_mouse<R: RepoClient>(
    mouse: MouseEvent,
    area: Rect,
    navigator: &mut Navigator<R>,
    host: &mut TerminalHost,
    clicks: &mut ClickTracker,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let panes = Panes::new(area, navigator.sub_kind().is_some());
    let Some(slot) = panes.slot_at(mouse.column, mouse.row) else {
        return;
    };
    let (Some(kind), Some(pane)) = (navigator.kind_in(slot), panes.area(slot)) else {
        return;
    };

    let list_area = navigator.view(kind).list_area(pane);
    let Some(row) = row_at(navigator.list(slot), list_area, mouse.row) else {
        return;
    };

    let double = clicks.click(slot, row, Instant::now());
    navigator.handle_click(slot, row, double, host);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_needs_same_row_in_time() {
        let mut clicks = ClickTracker::default();
        let start = Instant::now();

        assert!(!clicks.click(Slot::Main, 2, start));
        assert!(clicks.click(Slot::Main, 2, start + Duration::from_millis(100)));
        // a third click starts over
        assert!(!clicks.click(Slot::Main, 2, start + Duration::from_millis(200)));

        assert!(!clicks.click(Slot::Main, 3, start + Duration::from_millis(250)));
        assert!(!clicks.click(Slot::Sub, 3, start + Duration::from_millis(300)));
        assert!(!clicks.click(Slot::Sub, 3, start + Duration::from_secs(2)));
    }
}
