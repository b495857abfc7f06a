// Scatter widget: actual pick (x) vs redraft rank (y).
//
// Two scatter datasets, one per pick quality, with the fixed green/red
// color mapping. The block title carries the class summary so the counts
// stay visible while hopping between years.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::redraft::transform::PickAnalysis;
use crate::tui::ViewState;
use super::analysis_color;

/// Render the pick-vs-redraft scatter chart into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(view) = &state.view else {
        render_empty(frame, area, "Select a year to redraft.");
        return;
    };
    if view.scatter.is_empty() {
        render_empty(frame, area, "No picks recorded for this year.");
        return;
    }

    let good: Vec<(f64, f64)> = view
        .scatter
        .iter()
        .filter(|p| p.analysis == PickAnalysis::Good)
        .map(|p| (p.pick as f64, p.redraft_rank as f64))
        .collect();
    let bad: Vec<(f64, f64)> = view
        .scatter
        .iter()
        .filter(|p| p.analysis == PickAnalysis::Bad)
        .map(|p| (p.pick as f64, p.redraft_rank as f64))
        .collect();

    // Picks and ranks share the same 1..=n range, so one square bound fits
    // both axes.
    let max_pick = view.scatter.iter().map(|p| p.pick).max().unwrap_or(1);
    let bound = (max_pick.max(view.scatter.len() as u32) + 1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("Good Pick")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(analysis_color(PickAnalysis::Good)))
            .data(&good),
        Dataset::default()
            .name("Bad Pick")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(analysis_color(PickAnalysis::Bad)))
            .data(&bad),
    ];

    let title = format!(
        "Redraft for NBA Draft - Year {} | {} Good Picks - {} Bad Picks | {:.1} Total WSPS",
        view.year, view.summary.good_picks, view.summary.bad_picks, view.summary.total_wsps
    );

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("Pick")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, bound])
                .labels(axis_labels(bound)),
        )
        .y_axis(
            Axis::default()
                .title("Redraft")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, bound])
                .labels(axis_labels(bound)),
        );

    frame.render_widget(chart, area);
}

fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(format!("  {message}"))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Redraft"));
    frame.render_widget(paragraph, area);
}

fn axis_labels(bound: f64) -> Vec<Line<'static>> {
    vec![
        Line::from("0"),
        Line::from(format!("{:.0}", bound / 2.0)),
        Line::from(format!("{bound:.0}")),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DraftRecord, DraftTable};
    use crate::protocol::YearView;
    use crate::redraft::chart::{bar_view, scatter_view};
    use crate::redraft::summary::summarize;
    use crate::redraft::transform::compute_redraft;
    use std::sync::Arc;

    fn view_for(records: Vec<DraftRecord>, year: u16) -> Arc<YearView> {
        let table = DraftTable::from_records(records);
        let redrafted = compute_redraft(year, &table);
        Arc::new(YearView {
            year,
            summary: summarize(&redrafted),
            scatter: scatter_view(&redrafted),
            bars: bar_view(&redrafted, false),
            records: redrafted,
        })
    }

    fn sample_view() -> Arc<YearView> {
        view_for(
            vec![
                DraftRecord {
                    year: 2003,
                    pick: 1,
                    player: "A".into(),
                    team: "CLE".into(),
                    college: String::new(),
                    win_shares: 1.2,
                    wsps: 0.12,
                },
                DraftRecord {
                    year: 2003,
                    pick: 2,
                    player: "B".into(),
                    team: "DET".into(),
                    college: String::new(),
                    win_shares: 2.5,
                    wsps: 0.25,
                },
            ],
            2003,
        )
    }

    #[test]
    fn render_does_not_panic_without_view() {
        let backend = ratatui::backend::TestBackend::new(60, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_empty_view() {
        let backend = ratatui::backend::TestBackend::new(60, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.view = Some(view_for(vec![], 1950));
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_data() {
        let backend = ratatui::backend::TestBackend::new(60, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.view = Some(sample_view());
        state.selected_year = Some(2003);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn axis_labels_span_bounds() {
        let labels = axis_labels(60.0);
        assert_eq!(labels.len(), 3);
    }
}
