// Analytics beacon: optional fire-and-forget usage pings.
//
// One Google Analytics collect hit fires on startup and one per year
// selection. The transport sits behind an injectable `Notifier` trait so
// the redraft core stays side-effect-free and the app can run with the
// beacon disabled.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const COLLECT_URL: &str = "https://www.google-analytics.com/collect";
const EVENT_CATEGORY: &str = "nba_redraft";

// ---------------------------------------------------------------------------
// Events and the notifier seam
// ---------------------------------------------------------------------------

/// The two usage events the dashboard reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeaconEvent {
    PageLoad,
    YearSelected(u16),
}

impl BeaconEvent {
    /// The event-action value carried in the collect hit.
    pub fn action(&self) -> String {
        match self {
            BeaconEvent::PageLoad => "page_load".to_string(),
            BeaconEvent::YearSelected(year) => year.to_string(),
        }
    }
}

/// Outbound notification transport. Implemented by the GA client and by
/// test doubles.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, event: BeaconEvent) -> anyhow::Result<()>;
}

// ---------------------------------------------------------------------------
// Google Analytics transport
// ---------------------------------------------------------------------------

/// Measurement-protocol client for the legacy GA collect endpoint.
pub struct GaNotifier {
    http: reqwest::Client,
    tracking_id: String,
}

impl GaNotifier {
    pub fn new(tracking_id: String) -> Self {
        GaNotifier {
            http: reqwest::Client::new(),
            tracking_id,
        }
    }

    /// Build the collect URL for an event. GA only needs the client id to be
    /// unique per hit, so a timestamp string suffices.
    fn collect_url(&self, event: BeaconEvent, client_id: &str) -> String {
        format!(
            "{COLLECT_URL}?v=1&t=event&tid={}&cid={}&ec={EVENT_CATEGORY}&ea={}&aip=1",
            self.tracking_id,
            client_id,
            event.action()
        )
    }
}

#[async_trait]
impl Notifier for GaNotifier {
    async fn notify(&self, event: BeaconEvent) -> anyhow::Result<()> {
        let client_id = chrono::Utc::now().timestamp_millis().to_string();
        let url = self.collect_url(event, &client_id);
        self.http.post(url).send().await?.error_for_status()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Beacon
// ---------------------------------------------------------------------------

/// The beacon as seen by the app orchestrator.
pub enum Beacon {
    /// A tracking id is configured and hits are sent.
    Active(Arc<dyn Notifier>),
    /// No tracking id configured; every fire is a no-op.
    Disabled,
}

impl Beacon {
    /// Build a `Beacon` from the application config.
    ///
    /// Returns `Active` with the GA transport when a tracking id is present,
    /// otherwise `Disabled`.
    pub fn from_config(config: &Config) -> Self {
        match &config.beacon.tracking_id {
            Some(id) if !id.trim().is_empty() => {
                Beacon::Active(Arc::new(GaNotifier::new(id.trim().to_string())))
            }
            _ => Beacon::Disabled,
        }
    }

    /// Build a `Beacon` around an arbitrary notifier (tests, alternate
    /// transports).
    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Beacon::Active(notifier)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Beacon::Active(_))
    }

    /// Fire-and-forget: spawn the send and return immediately. Failures are
    /// logged at debug and never propagated — analytics must not affect the
    /// dashboard.
    pub fn fire(&self, event: BeaconEvent) {
        if let Beacon::Active(notifier) = self {
            let notifier = Arc::clone(notifier);
            tokio::spawn(async move {
                if let Err(e) = notifier.notify(event).await {
                    debug!("beacon send failed: {e}");
                }
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BeaconConfig, ChartsConfig};
    use tokio::sync::mpsc;

    fn config_with_tracking(tracking_id: Option<&str>) -> Config {
        Config {
            draft_csv: "data/test.csv".into(),
            charts: ChartsConfig::default(),
            beacon: BeaconConfig {
                tracking_id: tracking_id.map(String::from),
            },
        }
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
    fn event_actions() {
        assert_eq!(BeaconEvent::PageLoad.action(), "page_load");
        assert_eq!(BeaconEvent::YearSelected(2003).action(), "2003");
    }

    #[test]
    fn collect_url_shape() {
        let notifier = GaNotifier::new("UA-18433914-1".into());
        let url = notifier.collect_url(BeaconEvent::YearSelected(1996), "12345");
        assert_eq!(
            url,
            "https://www.google-analytics.com/collect?v=1&t=event&tid=UA-18433914-1&cid=12345&ec=nba_redraft&ea=1996&aip=1"
        );
    }

    #[test]
    fn from_config_active_with_tracking_id() {
        let beacon = Beacon::from_config(&config_with_tracking(Some("UA-1-1")));
        assert!(beacon.is_active());
    }

    #[test]
    fn from_config_disabled_without_tracking_id() {
        let beacon = Beacon::from_config(&config_with_tracking(None));
        assert!(!beacon.is_active());
    }

    #[test]
    fn from_config_disabled_with_blank_tracking_id() {
        let beacon = Beacon::from_config(&config_with_tracking(Some("   ")));
        assert!(!beacon.is_active());
    }

    #[tokio::test]
    async fn fire_delivers_event_to_notifier() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let beacon = Beacon::with_notifier(Arc::new(RecordingNotifier { tx }));

        beacon.fire(BeaconEvent::YearSelected(2003));

        let event = rx.recv().await.expect("event should be delivered");
        assert_eq!(event, BeaconEvent::YearSelected(2003));
    }

    #[tokio::test]
    async fn disabled_beacon_fire_is_noop() {
        let beacon = Beacon::Disabled;
        // Must not panic or spawn anything that fails.
        beacon.fire(BeaconEvent::PageLoad);
    }
}
