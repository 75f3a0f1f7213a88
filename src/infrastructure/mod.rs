// Infrastructure layer - External dependencies and adapters
pub mod airly_client;
pub mod config;
pub mod geoip;
pub mod stdio_bridge;
