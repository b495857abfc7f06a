// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the redraft dashboard:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +----------+---------------------------------------+
// | Years    | Main Panel (fill)                     |
// | (16 col) | scatter / bars / table tab            |
// +----------+---------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: dataset size, selected year.
    pub status_bar: Rect,
    /// Left column: year selection list.
    pub year_panel: Rect,
    /// Remaining space: tab-switched chart area.
    pub main_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // middle section (years + main)
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let help_bar = vertical[2];

    // Horizontal: year list (16 cols) | main panel (fill)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(30)])
        .split(middle);

    AppLayout {
        status_bar,
        year_panel: horizontal[0],
        main_panel: horizontal[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
