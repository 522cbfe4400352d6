use crate::domain::dashboard::LatLng;
use crate::domain::telemetry::Channel;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub backend: BackendSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    /// Base URL of the forecast backend, e.g. "http://127.0.0.1:5000".
    pub base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Minimum time the loading placeholder stays up after mount.
    #[serde(default = "default_min_loading_ms")]
    pub min_loading_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    600_000
}

fn default_min_loading_ms() -> u64 {
    1_000
}

/// Static site layout: map view, monitored devices, and road segments.
/// Fixed at startup, never mutated.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub map: MapSettings,
    /// Which channel each index of the readings feed lands in.
    #[serde(default)]
    pub feed_order: Vec<Channel>,
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
    #[serde(default)]
    pub paths: Vec<PathConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapSettings {
    pub tile_url: String,
    pub center: LatLng,
    pub zoom: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeviceConfig {
    pub id: String,
    pub name: String,
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub channel: Channel,
}

impl DeviceConfig {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PathConfig {
    pub channel: Channel,
    #[serde(default = "default_stroke_weight")]
    pub weight: u32,
    pub points: Vec<LatLng>,
}

fn default_stroke_weight() -> u32 {
    9
}

pub fn load_backend_config() -> anyhow::Result<BackendConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/backend"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_site_config() -> anyhow::Result<SiteConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/site"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
