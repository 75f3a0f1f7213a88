// Domain layer - models of the upstream payloads and session data
pub mod coordinates;
pub mod measurement;
pub mod station;
