// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod app;
pub mod chart;
pub mod config;
pub mod engine;
pub mod export;
pub mod ingest;
pub mod model;
pub mod roster;
pub mod store;
