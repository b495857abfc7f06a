// Application state and orchestration logic.
//
// The central loop that owns the loaded draft table, serves redraft views
// for user-selected years, and pushes UI updates to the TUI render loop.
// Views are memoized per year: the source table never changes within a
// session, so a class only needs to be redrafted once.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::beacon::{Beacon, BeaconEvent};
use crate::config::Config;
use crate::dataset::DraftTable;
use crate::protocol::{UiUpdate, UserCommand, YearView};
use crate::redraft::chart::{bar_view, scatter_view};
use crate::redraft::summary::summarize;
use crate::redraft::transform::compute_redraft;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Application state owned by the orchestrator task.
pub struct AppState {
    config: Config,
    table: DraftTable,
    beacon: Beacon,
    cache: HashMap<u16, Arc<YearView>>,
}

impl AppState {
    pub fn new(config: Config, table: DraftTable, beacon: Beacon) -> Self {
        AppState {
            config,
            table,
            beacon,
            cache: HashMap::new(),
        }
    }

    /// Distinct draft years available for selection, ascending.
    pub fn years(&self) -> Vec<u16> {
        self.table.years()
    }

    pub fn record_count(&self) -> usize {
        self.table.len()
    }

    /// The redraft view for a year, computed on first request and memoized.
    pub fn year_view(&mut self, year: u16) -> Arc<YearView> {
        if let Some(view) = self.cache.get(&year) {
            debug!(year, "serving memoized redraft view");
            return Arc::clone(view);
        }

        let records = compute_redraft(year, &self.table);
        let summary = summarize(&records);
        let scatter = scatter_view(&records);
        let bars = bar_view(&records, self.config.charts.include_zero_wsps_bars);
        debug!(year, picks = records.len(), "computed redraft view");

        let view = Arc::new(YearView {
            year,
            records,
            summary,
            scatter,
            bars,
        });
        self.cache.insert(year, Arc::clone(&view));
        view
    }
}

// ---------------------------------------------------------------------------
// Orchestrator loop
// ---------------------------------------------------------------------------

/// Run the orchestrator: push the initial catalog, then serve user commands
/// until the TUI quits or drops its command sender.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    let catalog = UiUpdate::Catalog {
        years: state.years(),
        record_count: state.record_count(),
    };
    if ui_tx.send(catalog).await.is_err() {
        return Ok(());
    }
    state.beacon.fire(BeaconEvent::PageLoad);

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            UserCommand::SelectYear(year) => {
                let view = state.year_view(year);
                if ui_tx.send(UiUpdate::YearView(view)).await.is_err() {
                    break;
                }
                state.beacon.fire(BeaconEvent::YearSelected(year));
            }
            UserCommand::ClearYear => {
                if ui_tx.send(UiUpdate::YearCleared).await.is_err() {
                    break;
                }
            }
            UserCommand::Quit => {
                info!("quit command received, shutting down orchestrator");
                break;
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beacon::Notifier;
    use crate::config::{BeaconConfig, ChartsConfig};
    use crate::dataset::DraftRecord;
    use crate::redraft::transform::PickAnalysis;
    use async_trait::async_trait;

    fn test_config() -> Config {
        Config {
            draft_csv: "data/test.csv".into(),
            charts: ChartsConfig::default(),
            beacon: BeaconConfig { tracking_id: None },
        }
    }

    fn make_record(year: u16, pick: u32, player: &str, wsps: f64) -> DraftRecord {
        DraftRecord {
            year,
            pick,
            player: player.into(),
            team: "TST".into(),
            college: String::new(),
            win_shares: wsps * 10.0,
            wsps,
        }
    }

    fn test_table() -> DraftTable {
        DraftTable::from_records(vec![
            make_record(2003, 1, "A", 0.12),
            make_record(2003, 2, "B", 0.25),
            make_record(2003, 3, "C", 0.05),
            make_record(1996, 1, "D", 0.9),
        ])
    }

    fn test_state() -> AppState {
        AppState::new(test_config(), test_table(), Beacon::Disabled)
    }

    struct RecordingNotifier {
        tx: mpsc::UnboundedSender<BeaconEvent>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, event: BeaconEvent) -> anyhow::Result<()> {
            self.tx.send(event)?;
            Ok(())
        }
    }

    #[test]
    fn years_ascending() {
        let state = test_state();
        assert_eq!(state.years(), vec![1996, 2003]);
    }

    #[test]
    fn year_view_contents() {
        let mut state = test_state();
        let view = state.year_view(2003);

        assert_eq!(view.year, 2003);
        assert_eq!(view.records.len(), 3);
        assert_eq!(view.records[0].record.player, "B");
        assert_eq!(view.summary.good_picks, 2);
        assert_eq!(view.summary.bad_picks, 1);
        assert_eq!(view.scatter.len(), 3);
        assert_eq!(view.bars.len(), 3);
        assert_eq!(view.records[1].analysis, PickAnalysis::Bad);
    }

    #[test]
    fn year_view_memoized() {
        let mut state = test_state();
        let first = state.year_view(2003);
        let second = state.year_view(2003);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn unknown_year_view_is_empty() {
        let mut state = test_state();
        let view = state.year_view(1950);
        assert!(view.records.is_empty());
        assert_eq!(view.summary.good_picks, 0);
        assert!(view.scatter.is_empty());
        assert!(view.bars.is_empty());
    }

    #[test]
    fn zero_wsps_bar_policy_from_config() {
        let mut config = test_config();
        config.charts.include_zero_wsps_bars = true;

        let table = DraftTable::from_records(vec![
            make_record(2000, 1, "Zero", 0.0),
            make_record(2000, 2, "Star", 1.0),
        ]);

        let mut inclusive = AppState::new(config, table.clone(), Beacon::Disabled);
        assert_eq!(inclusive.year_view(2000).bars.len(), 2);

        let mut exclusive = AppState::new(test_config(), table, Beacon::Disabled);
        assert_eq!(exclusive.year_view(2000).bars.len(), 1);
    }

    #[tokio::test]
    async fn run_pushes_catalog_then_serves_commands() {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(8);

        let handle = tokio::spawn(run(cmd_rx, ui_tx, test_state()));

        match ui_rx.recv().await.expect("catalog") {
            UiUpdate::Catalog {
                years,
                record_count,
            } => {
                assert_eq!(years, vec![1996, 2003]);
                assert_eq!(record_count, 4);
            }
            other => panic!("expected Catalog, got {other:?}"),
        }

        cmd_tx.send(UserCommand::SelectYear(2003)).await.unwrap();
        match ui_rx.recv().await.expect("year view") {
            UiUpdate::YearView(view) => {
                assert_eq!(view.year, 2003);
                assert_eq!(view.records.len(), 3);
            }
            other => panic!("expected YearView, got {other:?}"),
        }

        cmd_tx.send(UserCommand::ClearYear).await.unwrap();
        match ui_rx.recv().await.expect("cleared") {
            UiUpdate::YearCleared => {}
            other => panic!("expected YearCleared, got {other:?}"),
        }

        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn run_ends_when_command_sender_dropped() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<UserCommand>(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(8);

        let handle = tokio::spawn(run(cmd_rx, ui_tx, test_state()));
        let _ = ui_rx.recv().await; // catalog

        drop(cmd_tx);
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn beacon_fired_on_startup_and_selection() {
        let (beacon_tx, mut beacon_rx) = mpsc::unbounded_channel();
        let beacon = Beacon::with_notifier(Arc::new(RecordingNotifier { tx: beacon_tx }));
        let state = AppState::new(test_config(), test_table(), beacon);

        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(8);
        let handle = tokio::spawn(run(cmd_rx, ui_tx, state));

        let _ = ui_rx.recv().await; // catalog
        assert_eq!(beacon_rx.recv().await, Some(BeaconEvent::PageLoad));

        cmd_tx.send(UserCommand::SelectYear(1996)).await.unwrap();
        let _ = ui_rx.recv().await; // year view
        assert_eq!(beacon_rx.recv().await, Some(BeaconEvent::YearSelected(1996)));

        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();
    }
}
