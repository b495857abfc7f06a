// Year selection widget: a "(no year)" sentinel plus one row per draft year.
//
// Up/Down moves the cursor, Enter selects, Esc returns to the sentinel.
// The currently selected year is marked with `*`.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the year list into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    // Entry 0 is the sentinel; years follow in ascending order.
    let total = state.years.len() + 1;
    let visible_rows = (area.height as usize).saturating_sub(2).max(1);

    // Keep the cursor visible: scroll just enough that it fits in the window.
    let offset = state
        .year_cursor
        .saturating_add(1)
        .saturating_sub(visible_rows);

    let items: Vec<ListItem> = (offset..total.min(offset + visible_rows))
        .map(|i| format_entry(state, i))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Draft Year"),
    );
    frame.render_widget(list, area);
}

fn format_entry<'a>(state: &ViewState, index: usize) -> ListItem<'a> {
    let label = if index == 0 {
        "(no year)".to_string()
    } else {
        state.years[index - 1].to_string()
    };

    let is_cursor = index == state.year_cursor;
    let is_selected = index > 0 && state.selected_year == Some(state.years[index - 1]);

    let marker = if is_selected { "*" } else { " " };
    let cursor = if is_cursor { ">" } else { " " };

    let mut style = Style::default().fg(Color::White);
    if is_selected {
        style = style.fg(Color::Yellow);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::BOLD).bg(Color::DarkGray);
    }

    ListItem::new(Line::from(vec![Span::styled(
        format!("{cursor}{marker}{label}"),
        style,
    )]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
