// Telemetry poller - owns the fetch timer and the published snapshot
use crate::application::telemetry_repository::TelemetryRepository;
use crate::domain::telemetry::{
    Channel, ForecastEntry, ForecastFeed, ForecastSet, RawReading, TelemetrySnapshot,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct TelemetryPoller {
    repository: Arc<dyn TelemetryRepository>,
    /// Which channel each feed index lands in (index 0 first).
    feed_order: Vec<Channel>,
    interval: Duration,
}

/// Handle to the running poll task. The timer is held exactly once per
/// dashboard; `shutdown` releases it and is safe to call more than once.
pub struct PollerHandle {
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    pub fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl TelemetryPoller {
    pub fn new(
        repository: Arc<dyn TelemetryRepository>,
        feed_order: Vec<Channel>,
        interval: Duration,
    ) -> Self {
        Self {
            repository,
            feed_order,
            interval,
        }
    }

    /// Starts polling. The first cycle fires immediately, then one per
    /// interval tick with no backoff. Aborting the returned handle stops
    /// the timer; a response in flight at that point is simply dropped and
    /// can never touch the channel again.
    pub fn spawn(self) -> (watch::Receiver<TelemetrySnapshot>, PollerHandle) {
        let (tx, rx) = watch::channel(TelemetrySnapshot::default());

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            let mut cycle: u64 = 0;
            loop {
                ticker.tick().await;
                cycle += 1;
                self.run_cycle(&tx, cycle).await;
            }
        });

        (rx, PollerHandle { task: Some(task) })
    }

    /// One fetch cycle. Readings and forecast are independent requests; a
    /// failure on either side logs and keeps that slice of the previous
    /// snapshot (stale-but-available).
    async fn run_cycle(&self, tx: &watch::Sender<TelemetrySnapshot>, cycle: u64) {
        let (readings, forecast) = tokio::join!(
            self.repository.latest_readings(),
            self.repository.forecast(),
        );

        let mut snapshot = tx.borrow().clone();

        match readings {
            Ok(feeds) => apply_readings(&mut snapshot.readings, &feeds, &self.feed_order, cycle),
            Err(e) => tracing::warn!("readings fetch failed, keeping previous data: {e:#}"),
        }
        match forecast {
            Ok(feed) => snapshot.forecast = scale_forecast(&feed),
            Err(e) => tracing::warn!("forecast fetch failed, keeping previous data: {e:#}"),
        }
        snapshot.first_cycle_settled = true;

        tracing::debug!(cycle, "telemetry snapshot updated");
        let _ = tx.send(snapshot);
    }
}

/// Wholesale-replace the sensor record from a fetched feed. An empty feed
/// is treated like a failed fetch and leaves the previous record in place.
fn apply_readings(reading: &mut RawReading, feeds: &[Option<f64>], order: &[Channel], cycle: u64) {
    if feeds.is_empty() {
        tracing::warn!("readings feed was empty, keeping previous data");
        return;
    }

    let mut next = RawReading {
        created_at: Utc::now().to_rfc3339(),
        entry_id: cycle,
        ..RawReading::default()
    };
    for (index, channel) in order.iter().enumerate() {
        let value = feeds.get(index).copied().flatten().map(format_depth);
        next.set_channel(*channel, value);
    }
    *reading = next;
}

fn scale_forecast(feed: &ForecastFeed) -> ForecastSet {
    ForecastSet {
        ten_min: ForecastEntry {
            depth: feed.forecast_10min.map(format_depth),
            timestamp: feed.timestamp_10min.clone(),
        },
        thirty_min: ForecastEntry {
            depth: feed.forecast_30min.map(format_depth),
            timestamp: feed.timestamp_30min.clone(),
        },
        sixty_min: ForecastEntry {
            depth: feed.forecast_60min.map(format_depth),
            timestamp: feed.timestamp_60min.clone(),
        },
    }
}

/// Feed values arrive scaled x100 from meters; stored form is meters fixed
/// to 4 decimals.
fn format_depth(scaled: f64) -> String {
    format!("{:.4}", scaled / 100.0)
}
