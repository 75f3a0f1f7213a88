// Refresh controller - drives the acquire -> resolve -> refresh -> loop sequence
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

use crate::application::air_quality_api::{AirQualityApi, ApiError};
use crate::application::host_bridge::HostBridge;
use crate::application::location_provider::{LocationError, LocationProvider};
use crate::domain::coordinates::Coordinates;
use crate::domain::measurement::MeasurementSnapshot;
use crate::domain::station::Station;

/// Delay between automatic measurement refreshes (5 minutes).
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(300_000);

/// Why the startup chain halted. Past startup, failures degrade to an
/// absent snapshot instead of propagating.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("device location is unavailable")]
    Location(#[from] LocationError),

    #[error("nearest station lookup failed")]
    StationLookup(#[from] ApiError),
}

/// Why the display is currently empty. Observational only: the UI may use
/// it for a retry affordance, control flow never reads it back.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionFault {
    Location(String),
    StationLookup(String),
    Refresh(String),
}

#[derive(Default)]
struct SharedState {
    station: Option<Station>,
    snapshot: Option<MeasurementSnapshot>,
    fault: Option<SessionFault>,
}

/// Owns the session state and the periodic refresh timer.
///
/// The startup chain runs as named stages: acquire a position once, resolve
/// the nearest station once, perform the first refresh, then start the
/// timer. Each controller owns at most one live timer task; disabling
/// auto-refresh or dropping the controller aborts it.
pub struct RefreshController {
    api: Arc<dyn AirQualityApi>,
    location: Arc<dyn LocationProvider>,
    bridge: Arc<dyn HostBridge>,
    refresh_interval: Duration,
    coordinates: Option<Coordinates>,
    auto_refresh_enabled: bool,
    shared: Arc<Mutex<SharedState>>,
    refresh_task: Option<JoinHandle<()>>,
}

impl RefreshController {
    pub fn new(
        api: Arc<dyn AirQualityApi>,
        location: Arc<dyn LocationProvider>,
        bridge: Arc<dyn HostBridge>,
    ) -> Self {
        Self::with_interval(api, location, bridge, REFRESH_INTERVAL)
    }

    /// Create a controller that refreshes on a custom period instead of
    /// [`REFRESH_INTERVAL`].
    pub fn with_interval(
        api: Arc<dyn AirQualityApi>,
        location: Arc<dyn LocationProvider>,
        bridge: Arc<dyn HostBridge>,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            api,
            location,
            bridge,
            refresh_interval,
            coordinates: None,
            auto_refresh_enabled: true,
            shared: Arc::new(Mutex::new(SharedState::default())),
            refresh_task: None,
        }
    }

    /// Run the startup chain: acquire the device position, resolve the
    /// nearest station, perform the first refresh, and start the periodic
    /// timer when auto-refresh is enabled.
    ///
    /// On error the controller is left idle; no stage is retried.
    pub async fn initialize(&mut self) -> Result<(), StartupError> {
        let position = match self.location.current_position().await {
            Ok(position) => position,
            Err(err) => {
                tracing::warn!("location acquisition failed: {err}");
                self.set_fault(SessionFault::Location(err.to_string()));
                return Err(StartupError::Location(err));
            }
        };
        self.coordinates = Some(position);
        tracing::debug!(
            "device position acquired: ({}, {})",
            position.latitude,
            position.longitude
        );

        self.resolve_station(position).await?;

        self.refresh().await;
        if self.auto_refresh_enabled {
            self.start_refresh_timer();
        }
        Ok(())
    }

    async fn resolve_station(&mut self, position: Coordinates) -> Result<(), StartupError> {
        match self.api.nearest_station(position).await {
            Ok(station) => {
                tracing::debug!("nearest station resolved: sensor {}", station.id);
                let mut state = self.shared.lock().expect("session state lock poisoned");
                state.station = Some(station);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("nearest station lookup failed: {err}");
                self.set_fault(SessionFault::StationLookup(err.to_string()));
                Err(StartupError::StationLookup(err))
            }
        }
    }

    /// Fetch the current measurements of the resolved station. On success
    /// the snapshot is replaced and pushed to the host; on failure the
    /// snapshot is cleared entirely. Without a resolved station this is a
    /// logged no-op.
    pub async fn refresh(&self) {
        run_refresh(
            Arc::clone(&self.api),
            Arc::clone(&self.bridge),
            Arc::clone(&self.shared),
        )
        .await;
    }

    /// Flip auto-refresh and return the new value. Enabling starts the
    /// periodic timer, disabling aborts it; a stray timer is never leaked.
    pub fn toggle_auto_refresh(&mut self) -> bool {
        self.auto_refresh_enabled = !self.auto_refresh_enabled;
        if self.auto_refresh_enabled {
            self.start_refresh_timer();
        } else {
            self.stop_refresh_timer();
        }
        tracing::debug!("auto-refresh enabled: {}", self.auto_refresh_enabled);
        self.auto_refresh_enabled
    }

    /// Ask the host shell to close the window. No local state changes.
    pub async fn quit(&self) {
        self.bridge.request_close().await;
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn station(&self) -> Option<Station> {
        self.shared
            .lock()
            .expect("session state lock poisoned")
            .station
            .clone()
    }

    pub fn measurement_snapshot(&self) -> Option<MeasurementSnapshot> {
        self.shared
            .lock()
            .expect("session state lock poisoned")
            .snapshot
            .clone()
    }

    pub fn last_fault(&self) -> Option<SessionFault> {
        self.shared
            .lock()
            .expect("session state lock poisoned")
            .fault
            .clone()
    }

    pub fn is_auto_refresh_enabled(&self) -> bool {
        self.auto_refresh_enabled
    }

    fn set_fault(&self, fault: SessionFault) {
        self.shared
            .lock()
            .expect("session state lock poisoned")
            .fault = Some(fault);
    }

    fn start_refresh_timer(&mut self) {
        self.stop_refresh_timer();
        let api = Arc::clone(&self.api);
        let bridge = Arc::clone(&self.bridge);
        let shared = Arc::clone(&self.shared);
        let period = self.refresh_interval;
        self.refresh_task = Some(tokio::spawn(async move {
            // First tick one full period out, never before the initial
            // manual refresh has completed.
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                // A tick never waits on the previous fetch; late
                // completions overwrite the snapshot in arrival order.
                tokio::spawn(run_refresh(
                    Arc::clone(&api),
                    Arc::clone(&bridge),
                    Arc::clone(&shared),
                ));
            }
        }));
    }

    fn stop_refresh_timer(&mut self) {
        if let Some(task) = self.refresh_task.take() {
            task.abort();
        }
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.stop_refresh_timer();
    }
}

async fn run_refresh(
    api: Arc<dyn AirQualityApi>,
    bridge: Arc<dyn HostBridge>,
    shared: Arc<Mutex<SharedState>>,
) {
    let sensor_id = {
        let state = shared.lock().expect("session state lock poisoned");
        state.station.as_ref().map(|station| station.id)
    };
    let Some(sensor_id) = sensor_id else {
        tracing::warn!("refresh skipped: no station resolved yet");
        return;
    };

    match api.current_measurements(sensor_id).await {
        Ok(measurements) => {
            let snapshot = MeasurementSnapshot::accept(measurements);
            {
                let mut state = shared.lock().expect("session state lock poisoned");
                state.snapshot = Some(snapshot.clone());
                state.fault = None;
            }
            bridge.notify_data_update(&snapshot).await;
        }
        Err(err) => {
            tracing::warn!("measurement refresh failed: {err}");
            let mut state = shared.lock().expect("session state lock poisoned");
            state.snapshot = None;
            state.fault = Some(SessionFault::Refresh(err.to_string()));
        }
    }
}
