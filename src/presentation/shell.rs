// Dashboard shell - owns UI selection state and the loading flag
use crate::domain::dashboard::{PopupView, ViewState, LEGEND};
use crate::domain::telemetry::{Channel, TelemetrySnapshot};
use crate::infrastructure::config::MapSettings;
use crate::presentation::renderer::{MapScene, Scene, UiEvent};
use std::time::{Duration, Instant};

pub struct DashboardShell {
    map: MapSettings,
    /// Channels that must have seen at least one reading before the map
    /// replaces the loading placeholder.
    required_channels: Vec<Channel>,
    selection: Option<PopupView>,
    mounted_at: Instant,
    min_loading: Duration,
    first_cycle_settled: bool,
    channels_ready: bool,
}

impl DashboardShell {
    pub fn new(map: MapSettings, required_channels: Vec<Channel>, min_loading: Duration) -> Self {
        Self {
            map,
            required_channels,
            selection: None,
            mounted_at: Instant::now(),
            min_loading,
            first_cycle_settled: false,
            channels_ready: false,
        }
    }

    /// Folds a new snapshot into the shell's latches. Both latches only
    /// ever flip one way; once the map is up, loading never comes back.
    pub fn observe(&mut self, snapshot: &TelemetrySnapshot) {
        if snapshot.first_cycle_settled {
            self.first_cycle_settled = true;
        }
        if !self.channels_ready {
            self.channels_ready = self
                .required_channels
                .iter()
                .all(|c| snapshot.readings.channel(*c).is_some());
        }
    }

    /// Loading holds until the first cycle has settled and the minimum
    /// display duration has passed.
    pub fn is_loading(&self) -> bool {
        !(self.first_cycle_settled && self.mounted_at.elapsed() >= self.min_loading)
    }

    /// The one state-transition surface exposed to the user: selecting a
    /// marker opens its popup with the forecast panel frozen at click
    /// time; dismissing closes it.
    pub fn handle_event(&mut self, event: UiEvent, view: &ViewState) {
        match event {
            UiEvent::MarkerClicked(device_id) => {
                if let Some(marker) = view.markers.iter().find(|m| m.device_id == device_id) {
                    self.selection = Some(PopupView {
                        marker: marker.clone(),
                        forecast_lines: view.forecast_lines.clone(),
                    });
                } else {
                    tracing::warn!("click on unknown marker {device_id} ignored");
                }
            }
            UiEvent::PopupDismissed => self.selection = None,
        }
    }

    pub fn scene(&self, view: &ViewState) -> Scene {
        if self.is_loading() || !self.channels_ready {
            return Scene::Loading;
        }

        Scene::Map(MapScene {
            tile_url: self.map.tile_url.clone(),
            center: self.map.center,
            zoom: self.map.zoom,
            markers: view.markers.clone(),
            paths: view.paths.clone(),
            legend: LEGEND.to_vec(),
            popup: self.selection.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::{LatLng, MarkerView};
    use crate::domain::telemetry::RawReading;

    fn map_settings() -> MapSettings {
        MapSettings {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            center: LatLng {
                lat: 14.8415,
                lon: 120.7379,
            },
            zoom: 15.5,
        }
    }

    fn shell() -> DashboardShell {
        DashboardShell::new(
            map_settings(),
            vec![Channel::Field2, Channel::Field3],
            Duration::ZERO,
        )
    }

    fn marker(device_id: &str) -> MarkerView {
        MarkerView {
            device_id: device_id.to_string(),
            device_no: "Device 2".to_string(),
            location: "Capati Videoke".to_string(),
            position: LatLng {
                lat: 14.842162,
                lon: 120.735558,
            },
            flood_level: "0.2500 m".to_string(),
            warning: "Half-knee deep flood".to_string(),
        }
    }

    fn settled_snapshot() -> TelemetrySnapshot {
        TelemetrySnapshot {
            readings: RawReading {
                field2: Some("0.2500".to_string()),
                field3: Some("0.3300".to_string()),
                ..RawReading::default()
            },
            first_cycle_settled: true,
            ..TelemetrySnapshot::default()
        }
    }

    #[test]
    fn test_loading_until_first_cycle_settles_and_channels_report() {
        let mut shell = shell();
        let view = ViewState::default();
        assert_eq!(shell.scene(&view), Scene::Loading);

        // Settled but one channel has never reported
        let mut partial = settled_snapshot();
        partial.readings.field3 = None;
        shell.observe(&partial);
        assert_eq!(shell.scene(&view), Scene::Loading);

        shell.observe(&settled_snapshot());
        assert!(matches!(shell.scene(&view), Scene::Map(_)));
    }

    #[test]
    fn test_loading_never_returns_once_cleared() {
        let mut shell = shell();
        shell.observe(&settled_snapshot());
        assert!(!shell.is_loading());

        // A later cycle may wipe a channel; the map stays up with
        // no-data sentinels instead of the placeholder
        let mut wiped = settled_snapshot();
        wiped.readings.field2 = None;
        shell.observe(&wiped);
        assert!(matches!(shell.scene(&ViewState::default()), Scene::Map(_)));
    }

    #[test]
    fn test_select_then_dismiss_clears_popup_only() {
        let mut shell = shell();
        shell.observe(&settled_snapshot());

        let view = ViewState {
            markers: vec![marker("device-2")],
            ..ViewState::default()
        };

        shell.handle_event(UiEvent::MarkerClicked("device-2".to_string()), &view);
        match shell.scene(&view) {
            Scene::Map(map) => {
                let popup = map.popup.expect("popup should be open");
                assert_eq!(popup.marker.device_id, "device-2");
            }
            Scene::Loading => panic!("map should be up"),
        }

        shell.handle_event(UiEvent::PopupDismissed, &view);
        match shell.scene(&view) {
            Scene::Map(map) => assert!(map.popup.is_none()),
            Scene::Loading => panic!("map should be up"),
        }
        // The view itself is untouched by selection traffic
        assert_eq!(view.markers[0].flood_level, "0.2500 m");
    }

    #[test]
    fn test_new_selection_replaces_previous() {
        let mut shell = shell();
        shell.observe(&settled_snapshot());

        let mut other = marker("device-3");
        other.device_no = "Device 3".to_string();
        let view = ViewState {
            markers: vec![marker("device-2"), other],
            ..ViewState::default()
        };

        shell.handle_event(UiEvent::MarkerClicked("device-2".to_string()), &view);
        shell.handle_event(UiEvent::MarkerClicked("device-3".to_string()), &view);

        match shell.scene(&view) {
            Scene::Map(map) => {
                assert_eq!(map.popup.unwrap().marker.device_id, "device-3");
            }
            Scene::Loading => panic!("map should be up"),
        }
    }
}
