// Render-ready dashboard view models
use super::classify::ColorTier;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

/// Marker descriptor for one monitored device: static geometry plus the
/// latest classified reading. `flood_level` and `warning` carry explicit
/// no-data sentinels when the backing channel is invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub device_id: String,
    pub device_no: String,
    pub location: String,
    pub position: LatLng,
    pub flood_level: String,
    pub warning: String,
}

/// Road segment colored by the keyed channel's current reading. A `None`
/// color means the segment is not drawn at all.
#[derive(Debug, Clone, PartialEq)]
pub struct PathView {
    pub positions: Vec<LatLng>,
    pub color: Option<ColorTier>,
    pub weight: u32,
}

/// One line of the forecast panel: "<timestamp> : <depth> m".
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastLine {
    pub timestamp: String,
    pub depth: String,
}

/// Everything the renderer needs, recomputed from each telemetry snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub markers: Vec<MarkerView>,
    pub paths: Vec<PathView>,
    pub forecast_lines: Vec<ForecastLine>,
}

/// Contents of the open detail popup: the clicked marker plus the forecast
/// panel as it stood at click time.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub marker: MarkerView,
    pub forecast_lines: Vec<ForecastLine>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub tier: ColorTier,
    pub range: &'static str,
    pub passability: &'static str,
}

/// The side-menu legend. Its ranges describe the color table, not the
/// finer warning-label bands.
pub const LEGEND: [LegendEntry; 3] = [
    LegendEntry {
        tier: ColorTier::Green,
        range: "Low Flood Level: 0 - 0.25 m",
        passability: "PATV (Passable to All Types of Vehicles)",
    },
    LegendEntry {
        tier: ColorTier::Yellow,
        range: "Medium Flood Level: 0.25 - 0.50 m",
        passability: "NPLV (Not Passable to Light Vehicles)",
    },
    LegendEntry {
        tier: ColorTier::Red,
        range: "High Flood Level: > 0.50 m",
        passability: "NPATV (Not Passable to All Types of Vehicles)",
    },
];
