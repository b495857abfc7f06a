// Chart view preparation: display-oriented projections of redraft records
// consumed by the TUI chart widgets.

use crate::redraft::transform::{PickAnalysis, RedraftRecord};

// ---------------------------------------------------------------------------
// Scatter view
// ---------------------------------------------------------------------------

/// One point of the pick-vs-redraft scatter chart.
///
/// Carries the descriptive fields the detail panels show alongside the
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// X coordinate: actual draft slot.
    pub pick: u32,
    /// Y coordinate: redraft slot.
    pub redraft_rank: u32,
    pub analysis: PickAnalysis,
    pub player: String,
    pub team: String,
    pub college: String,
    pub win_shares: f64,
    pub wsps: f64,
}

/// One point per record, in redraft order. Color keying (green favorable,
/// red unfavorable) happens in the widget via `analysis`.
pub fn scatter_view(records: &[RedraftRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            pick: r.record.pick,
            redraft_rank: r.redraft_rank,
            analysis: r.analysis,
            player: r.record.player.clone(),
            team: r.record.team.clone(),
            college: r.record.college.clone(),
            win_shares: r.record.win_shares,
            wsps: r.record.wsps,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Bar view
// ---------------------------------------------------------------------------

/// One horizontal bar of the per-player WSPS chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub player: String,
    /// Bar length.
    pub wsps: f64,
    pub pick: u32,
    pub redraft_rank: u32,
    pub team: String,
    pub college: String,
}

/// One bar per record, sorted by WSPS ascending. Zero-WSPS rows are
/// excluded unless `include_zero_wsps` is set (config `[charts]` policy).
pub fn bar_view(records: &[RedraftRecord], include_zero_wsps: bool) -> Vec<BarEntry> {
    let mut entries: Vec<BarEntry> = records
        .iter()
        .filter(|r| include_zero_wsps || r.record.wsps != 0.0)
        .map(|r| BarEntry {
            player: r.record.player.clone(),
            wsps: r.record.wsps,
            pick: r.record.pick,
            redraft_rank: r.redraft_rank,
            team: r.record.team.clone(),
            college: r.record.college.clone(),
        })
        .collect();

    entries.sort_by(|a, b| {
        a.wsps
            .partial_cmp(&b.wsps)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
