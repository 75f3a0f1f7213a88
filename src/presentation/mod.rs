// Presentation layer - the host shell protocol surface
pub mod commands;
pub mod messages;
