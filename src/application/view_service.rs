// View-state derivation - recomputes render descriptors from the snapshot
use crate::domain::classify;
use crate::domain::dashboard::{ForecastLine, MarkerView, PathView, ViewState};
use crate::domain::reading;
use crate::domain::telemetry::{ForecastEntry, TelemetrySnapshot};
use crate::infrastructure::config::SiteConfig;

pub const NO_LEVEL_TEXT: &str = "No data available";
pub const NO_WARNING_TEXT: &str = "No warning data";
pub const NO_FORECAST_TEXT: &str = "No forecast data available";

/// Derives markers, path colors, and forecast lines from a telemetry
/// snapshot. Pure: the same snapshot always produces the same view state,
/// and nothing here touches telemetry.
pub struct ViewService {
    site: SiteConfig,
}

impl ViewService {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    pub fn derive(&self, snapshot: &TelemetrySnapshot) -> ViewState {
        let markers = self
            .site
            .devices
            .iter()
            .map(|device| {
                let value = snapshot
                    .readings
                    .channel(device.channel)
                    .filter(|v| reading::parse_level(v).is_some());
                let (flood_level, warning) = match value {
                    Some(v) => (
                        format!("{v} m"),
                        classify::flood_warning(v).to_string(),
                    ),
                    None => (NO_LEVEL_TEXT.to_string(), NO_WARNING_TEXT.to_string()),
                };
                MarkerView {
                    device_id: device.id.clone(),
                    device_no: device.name.clone(),
                    location: device.location.clone(),
                    position: device.position(),
                    flood_level,
                    warning,
                }
            })
            .collect();

        let paths = self
            .site
            .paths
            .iter()
            .map(|path| PathView {
                positions: path.points.clone(),
                color: snapshot
                    .readings
                    .channel(path.channel)
                    .and_then(classify::flood_color),
                weight: path.weight,
            })
            .collect();

        let forecast_lines = snapshot
            .forecast
            .entries()
            .map(forecast_line)
            .to_vec();

        ViewState {
            markers,
            paths,
            forecast_lines,
        }
    }
}

fn forecast_line(entry: &ForecastEntry) -> ForecastLine {
    match (&entry.timestamp, &entry.depth) {
        (Some(timestamp), Some(depth)) => ForecastLine {
            timestamp: timestamp.clone(),
            depth: format!("{depth} m"),
        },
        _ => ForecastLine {
            timestamp: "--".to_string(),
            depth: NO_FORECAST_TEXT.to_string(),
        },
    }
}
