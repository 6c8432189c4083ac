//! Shared row rendering for the list-backed views.

use crate::core::colors::Tone;
use crate::core::list::{ListEngine, Node};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const INDENT: &str = "  ";

pub fn tone_style(tone: Tone) -> Style {
    let color = match tone {
        Tone::Plain => return Style::default(),
        Tone::Yellow => Color::Yellow,
        Tone::Blue => Color::Blue,
        Tone::Green => Color::Green,
        Tone::Red => Color::Red,
        Tone::Magenta => Color::Magenta,
        Tone::Cyan => Color::Cyan,
        Tone::Muted => Color::DarkGray,
    };
    Style::default().fg(color)
}

pub fn span(text: impl Into<String>, tone: Tone) -> Span<'static> {
    Span::styled(text.into(), tone_style(tone))
}

/// Bordered block whose border shows focus.
pub fn panel(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Area inside the panel border.
pub fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// First visible row so that `selected` stays on screen.
pub fn scroll_offset(selected: Option<usize>, height: usize) -> usize {
    match selected {
        Some(index) if height > 0 && index >= height => index + 1 - height,
        _ => 0,
    }
}

/// Draw the visible rows of `list` inside a bordered panel.
///
/// `line` builds the cells of one row; indentation and the selection
/// highlight are added here.
pub fn render_list<F>(
    frame: &mut Frame,
    area: Rect,
    list: &ListEngine,
    title: &str,
    focused: bool,
    line: F,
) where
    F: Fn(&Node) -> Line<'static>,
{
    let block = panel(title, focused);
    let body = block.inner(area);
    frame.render_widget(block, area);

    let rows = list.rows();
    let selected = list.selected_index();
    let height = usize::from(body.height);
    let offset = scroll_offset(selected, height);

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(index, node)| {
            let mut row = line(node);
            if node.depth > 0 {
                row.spans.insert(0, Span::raw(INDENT.repeat(node.depth)));
            }
            if Some(index) == selected {
                let highlight = if focused {
                    Modifier::REVERSED
                } else {
                    Modifier::UNDERLINED
                };
                row = row.patch_style(Style::default().add_modifier(highlight));
            }
            row
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), body);
}

/// Row index under terminal row `y`, if any.
pub fn row_at(list: &ListEngine, list_area: Rect, y: u16) -> Option<usize> {
    let body = inner(list_area);
    if y < body.y || y >= body.y + body.height {
        return None;
    }
    let offset = scroll_offset(list.selected_index(), usize::from(body.height));
    let index = offset + usize::from(y - body.y);
    (index < list.rows().len()).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::{BranchEntry, Entry};
    use crate::core::list::TreeItem;

    fn list_of(count: i64) -> ListEngine {
        let mut list = ListEngine::new();
        list.set(
            (0..count)
                .map(|id| {
                    TreeItem::leaf(
                        id,
                        format!("row {id}"),
                        Entry::Branch(BranchEntry {
                            name: format!("b{id}"),
                            is_remote: false,
                            is_current: false,
                        }),
                    )
                })
                .collect(),
        );
        list
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(4), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(12), 5), 8);
        assert_eq!(scroll_offset(Some(3), 0), 0);
    }

    #[test]
    fn test_row_at_maps_inside_border() {
        let list = list_of(3);
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(row_at(&list, area, 0), None);
        assert_eq!(row_at(&list, area, 1), Some(0));
        assert_eq!(row_at(&list, area, 3), Some(2));
        assert_eq!(row_at(&list, area, 4), None);
    }

    #[test]
    fn test_row_at_follows_scroll() {
        let mut list = list_of(20);
        list.select_index(15);
        let area = Rect::new(0, 0, 20, 7);
        // five body rows, selection at the bottom
        assert_eq!(row_at(&list, area, 5), Some(15));
        assert_eq!(row_at(&list, area, 1), Some(11));
    }
}
