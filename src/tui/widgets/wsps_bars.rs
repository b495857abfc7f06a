// WSPS bar widget: one horizontal bar per player, ascending WSPS.
//
// Zero-WSPS players are excluded upstream by the configured bar policy.
// A full class rarely fits the panel, so the widget scrolls with j/k and
// the title shows the visible range.

use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Bar values are integers, so WSPS is rendered in hundredths; the printed
/// value label still shows the real number.
const WSPS_SCALE: f64 = 100.0;

/// Render the per-player WSPS bars into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(view) = &state.view else {
        render_empty(frame, area, "Select a year to redraft.");
        return;
    };
    if view.bars.is_empty() {
        render_empty(frame, area, "No nonzero-WSPS picks for this year.");
        return;
    }

    let total = view.bars.len();
    let visible_rows = (area.height as usize).saturating_sub(2).max(1);

    // Clamp scroll offset against content length
    let max_offset = total.saturating_sub(visible_rows);
    let offset = state.bar_scroll.min(max_offset);
    let shown = visible_rows.min(total - offset);

    let bars: Vec<Bar> = view.bars[offset..offset + shown]
        .iter()
        .map(|entry| {
            // Negative WSPS clamps to a zero-length bar; the text value
            // still shows the real number.
            let scaled = (entry.wsps.max(0.0) * WSPS_SCALE).round() as u64;
            Bar::default()
                .value(scaled)
                .text_value(format!("{:.2}", entry.wsps))
                .label(Line::from(entry.player.clone()))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let title = format!(
        "Win Shares Per Season (WSPS) by Player ({}-{} of {})",
        offset + 1,
        offset + shown,
        total
    );

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(format!("  {message}"))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("WSPS"));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
