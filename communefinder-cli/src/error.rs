//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use communefinder::app::LookupError;
use communefinder::config::ConfigFileError;
use communefinder::net::ProbeError;
use communefinder::region::DatasetError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Dataset could not be loaded at all
    Dataset(DatasetError),
    /// Lookup input was rejected
    Lookup(LookupError),
    /// Probe client error
    Probe(ProbeError),
    /// Failed to write output file
    FileWrite {
        path: String,
        error: std::io::Error,
    },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Dataset(_) => {
                eprintln!();
                eprintln!("The commune dataset could not be loaded. You can:");
                eprintln!("  1. Check the [dataset] url in ~/.communefinder/config.ini");
                eprintln!("  2. Retry with --offline to use the embedded outlines");
            }
            CliError::Lookup(LookupError::Parse(_)) => {
                eprintln!();
                eprintln!("Accepted coordinate formats:");
                eprintln!("  -22.27, 166.44");
                eprintln!("  20°44'19.7\"S 164°47'41.6\"E");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Dataset(e) => write!(f, "Failed to load commune dataset: {}", e),
            CliError::Lookup(e) => write!(f, "Lookup failed: {}", e),
            CliError::Probe(e) => write!(f, "Probe error: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Dataset(e) => Some(e),
            CliError::Lookup(e) => Some(e),
            CliError::Probe(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        CliError::Dataset(e)
    }
}

impl From<ProbeError> for CliError {
    fn from(e: ProbeError) -> Self {
        CliError::Probe(e)
    }
}
