//! HTTP handlers for the /api routes.

pub mod analyses;
pub mod analyze;
pub mod system;
