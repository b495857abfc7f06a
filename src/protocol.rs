// Message types exchanged between the app orchestrator and the TUI.

use std::sync::Arc;

use crate::redraft::chart::{BarEntry, ScatterPoint};
use crate::redraft::summary::DraftSummary;
use crate::redraft::transform::RedraftRecord;

/// Which tab is active in the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Scatter,
    Bars,
    Table,
}

impl TabId {
    /// Cycle order for the Tab key.
    pub fn next(self) -> TabId {
        match self {
            TabId::Scatter => TabId::Bars,
            TabId::Bars => TabId::Table,
            TabId::Table => TabId::Scatter,
        }
    }
}

/// Everything the TUI needs to render one selected draft year.
///
/// Built once per year by the orchestrator and shared (the source table
/// never changes within a session, so views are memoized).
#[derive(Debug, Clone, PartialEq)]
pub struct YearView {
    pub year: u16,
    /// The full redrafted class, WSPS-descending.
    pub records: Vec<RedraftRecord>,
    pub summary: DraftSummary,
    pub scatter: Vec<ScatterPoint>,
    pub bars: Vec<BarEntry>,
}

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    SelectYear(u16),
    ClearYear,
    Quit,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Initial catalog: available years (ascending) and dataset size.
    Catalog {
        years: Vec<u16>,
        record_count: usize,
    },
    /// Redraft view for the selected year. An unknown year arrives as a
    /// view with empty records, which renders as the empty state.
    YearView(Arc<YearView>),
    /// Selection cleared; render nothing until a year is chosen.
    YearCleared,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
