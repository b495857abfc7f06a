// Redraft transformation: re-rank a draft class by win shares per season.

use crate::dataset::{DraftRecord, DraftTable};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Whether a pick outperformed its redraft slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickAnalysis {
    /// The player's redraft rank is at or above where he was actually taken.
    Good,
    /// The player was taken earlier than his career warranted.
    Bad,
}

impl PickAnalysis {
    pub fn label(self) -> &'static str {
        match self {
            PickAnalysis::Good => "Good Pick",
            PickAnalysis::Bad => "Bad Pick",
        }
    }
}

/// A draft record annotated with its redraft position.
#[derive(Debug, Clone, PartialEq)]
pub struct RedraftRecord {
    pub record: DraftRecord,
    /// 1-based position when the year's class is sorted by WSPS descending.
    pub redraft_rank: u32,
    pub analysis: PickAnalysis,
}

// ---------------------------------------------------------------------------
// Transformation
// ---------------------------------------------------------------------------

/// Re-rank the given year's draft class by WSPS.
///
/// Steps:
/// 1. Filter the table to rows with the requested year.
/// 2. Sort by WSPS descending. The sort is stable, so rows with equal WSPS
///    (common: many players retire with exactly 0.0) keep their original
///    table order, which keeps rank assignment deterministic.
/// 3. Assign 1-based redraft ranks in sorted order.
/// 4. Label each pick: `Good` when `pick - redraft_rank >= 0`, else `Bad`.
///
/// A year absent from the table yields an empty vec; this doubles as the
/// "no year selected" state and is not an error. Pure function of its inputs.
pub fn compute_redraft(year: u16, table: &DraftTable) -> Vec<RedraftRecord> {
    let mut rows: Vec<&DraftRecord> = table
        .records()
        .iter()
        .filter(|r| r.year == year)
        .collect();

    rows.sort_by(|a, b| {
        b.wsps
            .partial_cmp(&a.wsps)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    rows.into_iter()
        .enumerate()
        .map(|(i, record)| {
            let redraft_rank = (i + 1) as u32;
            let analysis = if record.pick as i64 - redraft_rank as i64 >= 0 {
                PickAnalysis::Good
            } else {
                PickAnalysis::Bad
            };
            RedraftRecord {
                record: record.clone(),
                redraft_rank,
                analysis,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
