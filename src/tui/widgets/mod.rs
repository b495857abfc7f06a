// TUI widget modules for each dashboard panel.

pub mod scatter;
pub mod status_bar;
pub mod table;
pub mod wsps_bars;
pub mod year_select;

use ratatui::style::Color;

use crate::redraft::transform::PickAnalysis;

/// Fixed color mapping for pick quality: favorable green, unfavorable red.
pub fn analysis_color(analysis: PickAnalysis) -> Color {
    match analysis {
        PickAnalysis::Good => Color::Green,
        PickAnalysis::Bad => Color::Red,
    }
}
