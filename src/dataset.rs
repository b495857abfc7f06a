// Draft dataset loading and normalization.
//
// Reads Basketball-Reference-style draft CSVs: one row per historical pick
// with career win shares (WS) and win shares per season (WSPS) columns.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::warn;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One historical draft pick as loaded from the CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRecord {
    pub year: u16,
    /// 1-based position at which the player was selected that year.
    pub pick: u32,
    pub player: String,
    pub team: String,
    pub college: String,
    /// Cumulative career win shares.
    pub win_shares: f64,
    /// Win shares normalized by seasons played. Zero or missing in the CSV
    /// loads as 0.0.
    pub wsps: f64,
}

/// The full draft dataset, immutable after load. Row order is the CSV order,
/// which downstream ranking relies on for tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct DraftTable {
    records: Vec<DraftRecord>,
}

impl DraftTable {
    pub fn from_records(records: Vec<DraftRecord>) -> Self {
        DraftTable { records }
    }

    pub fn records(&self) -> &[DraftRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct draft years present in the table, ascending.
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to read draft data {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("draft data is missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("validation error: {0}")]
    Validation(String),
}

/// Header columns every draft CSV must carry.
const REQUIRED_COLUMNS: &[&str] = &["Year", "Pk", "Player", "Tm", "College", "WS", "WSPS"];

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private) — Basketball-Reference export format
// ---------------------------------------------------------------------------

/// Raw draft CSV row. WS/WSPS are blank for players with no recorded
/// minutes, so they parse through `f64_or_blank`. Extra columns are
/// silently absorbed via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawDraftRow {
    Year: u16,
    Pk: u32,
    Player: String,
    #[serde(default)]
    Tm: String,
    #[serde(default)]
    College: String,
    #[serde(default, deserialize_with = "f64_or_blank")]
    WS: f64,
    #[serde(default, deserialize_with = "f64_or_blank")]
    WSPS: f64,
    /// Absorb any extra columns the export includes.
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Deserialize an f64 that may arrive as a number, a numeric string, or a
/// blank field (blank means the stat was never recorded and counts as 0.0).
fn f64_or_blank<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;

    impl serde::de::Visitor<'_> for Visitor {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a float, integer, or blank field")
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<f64, E> {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Ok(0.0)
            } else {
                trimmed.parse::<f64>().map_err(E::custom)
            }
        }
    }

    deserializer.deserialize_any(Visitor)
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_records_from_reader<R: Read>(rdr: R) -> Result<Vec<DraftRecord>, DataLoadError> {
    let mut reader = csv::Reader::from_reader(rdr);

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h.trim() == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns { missing });
    }

    let mut records = Vec::new();
    for result in reader.deserialize::<RawDraftRow>() {
        match result {
            Ok(raw) => {
                if !raw.WS.is_finite() || !raw.WSPS.is_finite() {
                    warn!("skipping draft row '{}': non-finite WS/WSPS value", raw.Player.trim());
                    continue;
                }
                records.push(DraftRecord {
                    year: raw.Year,
                    pick: raw.Pk,
                    player: raw.Player.trim().to_string(),
                    team: raw.Tm.trim().to_string(),
                    college: raw.College.trim().to_string(),
                    win_shares: raw.WS,
                    wsps: raw.WSPS,
                });
            }
            Err(e) => {
                warn!("skipping malformed draft row: {}", e);
            }
        }
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Public path-based loader
// ---------------------------------------------------------------------------

/// Load the draft dataset from a CSV file.
///
/// Fatal on a missing/unreadable file, missing required header columns, or a
/// file that yields zero valid rows. Individual malformed rows are skipped
/// with a logged warning.
pub fn load_draft_table(path: &Path) -> Result<DraftTable, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|e| DataLoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let records = load_records_from_reader(file)?;
    if records.is_empty() {
        return Err(DataLoadError::Validation(format!(
            "draft CSV {} produced zero valid rows",
            path.display()
        )));
    }

    Ok(DraftTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
