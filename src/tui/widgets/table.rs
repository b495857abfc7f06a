// Redraft table widget: the full class with descriptive columns.
//
// One row per pick: player, team, college, WS, WSPS, plus the computed
// redraft rank and pick verdict. This is where the scatter's point
// metadata is readable in full.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::tui::ViewState;
use super::analysis_color;

/// Render the redraft table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(view) = &state.view else {
        render_empty(frame, area, "Select a year to redraft.");
        return;
    };
    if view.records.is_empty() {
        render_empty(frame, area, "No picks recorded for this year.");
        return;
    }

    let total = view.records.len();
    // Borders plus the header row
    let visible_rows = (area.height as usize).saturating_sub(3).max(1);
    let max_offset = total.saturating_sub(visible_rows);
    let offset = state.table_scroll.min(max_offset);
    let shown = visible_rows.min(total - offset);

    let header = Row::new(vec![
        Cell::from("Redraft"),
        Cell::from("Pk"),
        Cell::from("Player"),
        Cell::from("Tm"),
        Cell::from("College"),
        Cell::from("WS"),
        Cell::from("WSPS"),
        Cell::from("Verdict"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view.records[offset..offset + shown]
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(format!("{}", r.redraft_rank)),
                Cell::from(format!("{}", r.record.pick)),
                Cell::from(r.record.player.clone()),
                Cell::from(r.record.team.clone()),
                Cell::from(r.record.college.clone()),
                Cell::from(format!("{:.1}", r.record.win_shares)),
                Cell::from(format!("{:.2}", r.record.wsps)),
                Cell::from(r.analysis.label()),
            ])
            .style(Style::default().fg(analysis_color(r.analysis)))
        })
        .collect();

    let title = format!(
        "Redraft Table ({}-{} of {})",
        offset + 1,
        offset + shown,
        total
    );

    let widths = [
        Constraint::Length(7),
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Length(4),
        Constraint::Min(14),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(format!("  {message}"))
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Redraft Table"),
        );
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
