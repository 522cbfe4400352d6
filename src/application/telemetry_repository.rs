// Repository trait for telemetry data access
use crate::domain::telemetry::ForecastFeed;
use async_trait::async_trait;

#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Latest water-level feed, in backend order, values scaled x100 from
    /// meters. A non-numeric entry comes back as `None` in its slot.
    async fn latest_readings(&self) -> anyhow::Result<Vec<Option<f64>>>;

    /// Short-horizon depth forecast, values scaled x100 from meters.
    async fn forecast(&self) -> anyhow::Result<ForecastFeed>;
}
