// Main entry point - Dependency injection and dashboard loop
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;

use crate::application::poller::TelemetryPoller;
use crate::application::view_service::ViewService;
use crate::domain::telemetry::Channel;
use crate::infrastructure::config::{load_backend_config, load_site_config};
use crate::infrastructure::console_map::ConsoleMapRenderer;
use crate::infrastructure::http_repository::HttpTelemetryRepository;
use crate::presentation::renderer::MapRenderer;
use crate::presentation::shell::DashboardShell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let backend = load_backend_config()?;
    let site = load_site_config()?;
    let min_loading = Duration::from_millis(backend.backend.min_loading_ms);

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpTelemetryRepository::new(backend.backend.base_url.clone()));

    // Create poller and derivation service (application layer)
    let poller = TelemetryPoller::new(
        repository,
        site.feed_order.clone(),
        Duration::from_millis(backend.backend.poll_interval_ms),
    );
    let required_channels: Vec<Channel> = site.devices.iter().map(|d| d.channel).collect();
    let mut shell = DashboardShell::new(site.map.clone(), required_channels, min_loading);
    let view_service = ViewService::new(site);
    let mut renderer = ConsoleMapRenderer::default();

    // Mount: the poller fires its first cycle immediately
    let (mut snapshots, mut poller_handle) = poller.spawn();

    renderer.render(&shell.scene(&view_service.derive(&snapshots.borrow())));

    // One-shot wakeup so the loading placeholder comes down on time even
    // though the next snapshot is a full poll interval away
    let splash = tokio::time::sleep(min_loading);
    tokio::pin!(splash);
    let mut splash_done = false;

    // A real map widget would add a select arm feeding its click events
    // into shell.handle_event
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                shell.observe(&snapshot);
                let view = view_service.derive(&snapshot);
                renderer.render(&shell.scene(&view));
            }
            () = &mut splash, if !splash_done => {
                splash_done = true;
                let snapshot = snapshots.borrow().clone();
                shell.observe(&snapshot);
                let view = view_service.derive(&snapshot);
                renderer.render(&shell.scene(&view));
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    // Unmount: release the poll timer exactly once
    poller_handle.shutdown();

    Ok(())
}
