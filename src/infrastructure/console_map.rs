// Console renderer - logs render instructions instead of driving a map
use crate::presentation::renderer::{MapRenderer, Scene};

/// Stand-in for a real map widget. Useful for running the dashboard
/// headless and for eyeballing what the map layer would be told to draw.
#[derive(Debug, Default)]
pub struct ConsoleMapRenderer;

impl MapRenderer for ConsoleMapRenderer {
    fn render(&mut self, scene: &Scene) {
        match scene {
            Scene::Loading => tracing::info!("render: loading placeholder"),
            Scene::Map(map) => {
                tracing::info!(
                    zoom = map.zoom,
                    markers = map.markers.len(),
                    paths = map.paths.len(),
                    "render: map centered at ({:.4}, {:.4})",
                    map.center.lat,
                    map.center.lon
                );
                for marker in &map.markers {
                    tracing::info!(
                        "  marker {} ({}): {} - {}",
                        marker.device_no,
                        marker.location,
                        marker.flood_level,
                        marker.warning
                    );
                }
                for path in &map.paths {
                    match path.color {
                        Some(tier) => tracing::info!(
                            "  path with {} points, weight {}, color {}",
                            path.positions.len(),
                            path.weight,
                            tier.css()
                        ),
                        None => tracing::info!(
                            "  path with {} points, not drawn (no data)",
                            path.positions.len()
                        ),
                    }
                }
                if let Some(popup) = &map.popup {
                    tracing::info!(
                        "  popup: {} at {} - {} ({})",
                        popup.marker.device_no,
                        popup.marker.location,
                        popup.marker.flood_level,
                        popup.marker.warning
                    );
                    for line in &popup.forecast_lines {
                        tracing::info!("    {} : {}", line.timestamp, line.depth);
                    }
                }
            }
        }
    }
}
