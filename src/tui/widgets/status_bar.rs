// Status bar widget: dataset size and current selection at a glance.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the one-row status bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let year_str = state
        .selected_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "none".to_string());

    let text = format!(
        " NBA Redraftables | {} picks across {} drafts | Year: {}",
        state.record_count,
        state.years.len(),
        year_str
    );

    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
