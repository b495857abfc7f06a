// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (tab switching,
// year-list navigation, scrolling).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::{TabId, UserCommand};

/// Rows moved per PageUp/PageDown press.
const PAGE_SCROLL: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator (year selection, clearing, quit). Returns `None` when
/// the key press was handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') => Some(UserCommand::Quit),

        // --- Year list navigation (entry 0 is the "(no year)" sentinel) ---
        KeyCode::Up => {
            view_state.year_cursor = view_state.year_cursor.saturating_sub(1);
            None
        }
        KeyCode::Down => {
            if view_state.year_cursor < view_state.years.len() {
                view_state.year_cursor += 1;
            }
            None
        }
        KeyCode::Enter => {
            if view_state.year_cursor == 0 {
                view_state
                    .selected_year
                    .is_some()
                    .then_some(UserCommand::ClearYear)
            } else {
                view_state
                    .years
                    .get(view_state.year_cursor - 1)
                    .copied()
                    .map(UserCommand::SelectYear)
            }
        }
        KeyCode::Esc => {
            view_state.year_cursor = 0;
            view_state
                .selected_year
                .is_some()
                .then_some(UserCommand::ClearYear)
        }

        // --- Tab switching ---
        KeyCode::Char('1') => {
            view_state.active_tab = TabId::Scatter;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = TabId::Bars;
            None
        }
        KeyCode::Char('3') => {
            view_state.active_tab = TabId::Table;
            None
        }
        KeyCode::Tab => {
            view_state.active_tab = view_state.active_tab.next();
            None
        }

        // --- Scrolling within the active tab ---
        KeyCode::Char('j') => {
            scroll_active(view_state, 1, true);
            None
        }
        KeyCode::Char('k') => {
            scroll_active(view_state, 1, false);
            None
        }
        KeyCode::PageDown => {
            scroll_active(view_state, PAGE_SCROLL, true);
            None
        }
        KeyCode::PageUp => {
            scroll_active(view_state, PAGE_SCROLL, false);
            None
        }

        _ => None,
    }
}

/// Adjust the scroll offset of the active tab. Offsets saturate at zero
/// here; the upper bound is clamped at render time against the content
/// length, since only the widget knows its visible row count.
fn scroll_active(view_state: &mut ViewState, amount: usize, down: bool) {
    let offset = match view_state.active_tab {
        TabId::Bars => &mut view_state.bar_scroll,
        TabId::Table => &mut view_state.table_scroll,
        TabId::Scatter => return, // the chart has no scroll dimension
    };
    if down {
        *offset = offset.saturating_add(amount);
    } else {
        *offset = offset.saturating_sub(amount);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
