//! Utility functions and types for the panadapter.

pub mod db;
pub mod log;
pub mod telemetry;

pub use db::{db_to_power, power_to_db};
