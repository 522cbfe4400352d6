// Telemetry state slices published by the poller

use serde::Deserialize;

/// One numeric telemetry field on the shared sensor feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Field1,
    Field2,
    Field3,
    Field4,
}

/// Latest sensor record. Channel values are water levels in meters,
/// formatted to 4 decimals; `None` means the channel carried nothing
/// usable. Replaced wholesale on every successful readings fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawReading {
    pub created_at: String,
    pub entry_id: u64,
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
    pub field4: Option<String>,
}

impl RawReading {
    pub fn channel(&self, channel: Channel) -> Option<&str> {
        match channel {
            Channel::Field1 => self.field1.as_deref(),
            Channel::Field2 => self.field2.as_deref(),
            Channel::Field3 => self.field3.as_deref(),
            Channel::Field4 => self.field4.as_deref(),
        }
    }

    pub fn set_channel(&mut self, channel: Channel, value: Option<String>) {
        let slot = match channel {
            Channel::Field1 => &mut self.field1,
            Channel::Field2 => &mut self.field2,
            Channel::Field3 => &mut self.field3,
            Channel::Field4 => &mut self.field4,
        };
        *slot = value;
    }
}

/// Predicted depth at one horizon, already scaled to meters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastEntry {
    pub depth: Option<String>,
    pub timestamp: Option<String>,
}

/// Forecasts for the 10/30/60-minute horizons. Replaced wholesale on every
/// successful forecast fetch; a failed fetch leaves the previous set alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSet {
    pub ten_min: ForecastEntry,
    pub thirty_min: ForecastEntry,
    pub sixty_min: ForecastEntry,
}

impl ForecastSet {
    pub fn entries(&self) -> [&ForecastEntry; 3] {
        [&self.ten_min, &self.thirty_min, &self.sixty_min]
    }
}

/// Forecast payload as served by the backend: six named fields, depth
/// values still scaled x100 from meters. The poller does the scaling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastFeed {
    pub forecast_10min: Option<f64>,
    pub timestamp_10min: Option<String>,
    pub forecast_30min: Option<f64>,
    pub timestamp_30min: Option<String>,
    pub forecast_60min: Option<f64>,
    pub timestamp_60min: Option<String>,
}

/// Immutable view of all telemetry state, swapped atomically by the poller.
/// Downstream components only ever read it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub readings: RawReading,
    pub forecast: ForecastSet,
    /// Set once the first fetch cycle has finished, success or not.
    pub first_cycle_settled: bool,
}
