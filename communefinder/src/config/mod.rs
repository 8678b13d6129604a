//! User configuration.
//!
//! An INI file at `~/.communefinder/config.ini` with sections for the
//! dataset source, the runtime-adjustable region/marker styles and the
//! tile-server probe.

mod file;
mod parser;
mod settings;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, DatasetSettings, ProbeSettings, StyleSettings, DEFAULT_DATASET_URL,
    DEFAULT_NAME_PROPERTY, DEFAULT_PROBE_TIMEOUT, DEFAULT_TILE_SERVERS,
};
