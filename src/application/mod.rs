// Application layer - the refresh use case and its collaborator seams
pub mod air_quality_api;
pub mod host_bridge;
pub mod location_provider;
pub mod refresh_controller;
