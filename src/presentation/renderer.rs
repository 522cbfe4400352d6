// Map collaborator contract - render instructions out, click events in
use crate::domain::dashboard::{LatLng, LegendEntry, MarkerView, PathView, PopupView};

/// What the dashboard asks the map layer to draw. While loading, only a
/// minimal placeholder is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Loading,
    Map(MapScene),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub tile_url: String,
    pub center: LatLng,
    pub zoom: f64,
    pub markers: Vec<MarkerView>,
    pub paths: Vec<PathView>,
    pub legend: Vec<LegendEntry>,
    pub popup: Option<PopupView>,
}

/// Interactions the map layer reports back. These only ever touch UI
/// selection state, never telemetry.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    MarkerClicked(String),
    PopupDismissed,
}

/// The only surface a map widget has to satisfy: draw the given scene.
pub trait MapRenderer {
    fn render(&mut self, scene: &Scene);
}
