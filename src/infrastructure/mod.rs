// Infrastructure layer - external dependencies and adapters
pub mod config;
pub mod console_map;
pub mod http_repository;
