//! communefinder CLI - which commune of New Caledonia is this point in?
//!
//! This binary provides a command-line interface to the communefinder
//! library: coordinate and name lookups, dataset inspection, tile-server
//! probing and point export.

use clap::{Parser, Subcommand};

mod commands;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "communefinder")]
#[command(version = communefinder::VERSION)]
#[command(about = "Look up which commune of New Caledonia contains a point", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Skip log file initialization (log to stderr only via RUST_LOG)
    #[arg(long, global = true)]
    no_log_file: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a coordinate or commune name
    Locate(commands::locate::LocateArgs),
    /// Inspect the commune dataset
    Dataset(commands::dataset::DatasetArgs),
    /// Probe the configured tile servers and report the first reachable
    Probe(commands::probe::ProbeArgs),
    /// Place points, resolve their communes and export GeoJSON
    Mark(commands::mark::MarkArgs),
    /// Convert between decimal degrees and DMS
    Convert(commands::convert::ConvertArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The guard must outlive every command so buffered log lines flush
    let _logging_guard = if cli.no_log_file {
        None
    } else {
        match communefinder::logging::init_logging(
            &communefinder::logging::default_log_dir(),
            communefinder::logging::default_log_file(),
        ) {
            Ok(guard) => Some(guard),
            Err(e) => CliError::LoggingInit(e.to_string()).exit(),
        }
    };

    let result = match cli.command {
        Commands::Locate(args) => commands::locate::run(args).await,
        Commands::Dataset(args) => commands::dataset::run(args).await,
        Commands::Probe(args) => commands::probe::run(args).await,
        Commands::Mark(args) => commands::mark::run(args).await,
        Commands::Convert(args) => commands::convert::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
