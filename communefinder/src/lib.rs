//! communefinder - Which commune of New Caledonia is this point in?
//!
//! This library is the lookup core behind the map front-end: it accepts
//! human-entered coordinates in several encodings, normalizes and validates
//! them, resolves the commune containing the point (or matching a name),
//! and tracks the selection/highlight state the renderer mirrors.
//!
//! # High-Level API
//!
//! The [`app::AppController`] reduces commands into state changes plus
//! side-effect intents:
//!
//! ```
//! use communefinder::app::{AppController, Command};
//! use communefinder::region::{embedded_dataset, DatasetSource, LoadedDataset};
//!
//! let mut controller = AppController::new();
//! let dataset = LoadedDataset {
//!     regions: embedded_dataset().unwrap(),
//!     source: DatasetSource::Embedded,
//! };
//! controller.handle(Command::DatasetLoaded(dataset));
//!
//! let effects = controller.handle(Command::Lookup("-22.27, 166.44".to_string()));
//! assert!(!effects.is_empty());
//! ```

pub mod app;
pub mod config;
pub mod coord;
pub mod geometry;
pub mod logging;
pub mod net;
pub mod parse;
pub mod points;
pub mod region;
pub mod resolve;

/// Version of the communefinder library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
