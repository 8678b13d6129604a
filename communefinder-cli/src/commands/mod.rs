//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`locate`] - Resolve a coordinate or commune name
//! - [`dataset`] - Inspect the commune dataset
//! - [`probe`] - Find a reachable tile server
//! - [`mark`] - Place points and export them as GeoJSON
//! - [`convert`] - Decimal degrees ↔ DMS conversion

pub mod common;
pub mod convert;
pub mod dataset;
pub mod locate;
pub mod mark;
pub mod probe;
