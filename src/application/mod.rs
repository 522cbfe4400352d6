// Application layer - use cases orchestrating domain logic
pub mod poller;
pub mod telemetry_repository;
pub mod view_service;
