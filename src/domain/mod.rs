// Domain layer - pure models and classification logic
pub mod classify;
pub mod dashboard;
pub mod reading;
pub mod telemetry;
