// Summary statistics for a redrafted class, consumed by chart titles.

use crate::redraft::transform::{PickAnalysis, RedraftRecord};

/// Aggregate pick-quality counts and total WSPS for one draft class.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DraftSummary {
    pub good_picks: usize,
    pub bad_picks: usize,
    /// Sum of WSPS across the class, rounded to 1 decimal place
    /// (half away from zero).
    pub total_wsps: f64,
}

/// Compute the summary for a redrafted class.
pub fn summarize(records: &[RedraftRecord]) -> DraftSummary {
    let good_picks = records
        .iter()
        .filter(|r| r.analysis == PickAnalysis::Good)
        .count();
    let bad_picks = records.len() - good_picks;

    let sum: f64 = records.iter().map(|r| r.record.wsps).sum();
    let total_wsps = (sum * 10.0).round() / 10.0;

    DraftSummary {
        good_picks,
        bad_picks,
        total_wsps,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
