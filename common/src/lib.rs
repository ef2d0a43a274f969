// Shared library for the task board API: configuration, models, persistence
// and the business rules behind every user and task endpoint.

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod service;
pub mod slug;
pub mod telemetry;
