// Main entry point - Dependency injection and the host command loop
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::refresh_controller::RefreshController;
use crate::infrastructure::airly_client::AirlyClient;
use crate::infrastructure::config::load_config;
use crate::infrastructure::geoip::IpGeolocator;
use crate::infrastructure::stdio_bridge::StdioBridge;
use crate::presentation::commands::run_command_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let app_config = load_config()?;

    // Create adapters (infrastructure layer)
    let api = Arc::new(AirlyClient::new(
        app_config.airly.base_url,
        app_config.airly.token,
    ));
    let location = Arc::new(IpGeolocator::new(app_config.geolocation.endpoint));
    let bridge = Arc::new(StdioBridge::new());

    // Create the controller (application layer)
    let mut controller = RefreshController::new(api, location, bridge);

    // Run the startup chain; a failure leaves the window empty but the
    // process keeps serving commands.
    if let Err(err) = controller.initialize().await {
        tracing::warn!("startup data chain halted: {err}");
    }

    // Serve UI commands from the host shell (presentation layer)
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_command_loop(stdin, &mut controller).await?;

    Ok(())
}
