//! Probe command - find a reachable tile server.

use std::time::Duration;

use clap::Args;

use communefinder::config::ConfigFile;
use communefinder::net::TileServerProbe;

use crate::error::CliError;

/// Arguments for the probe command.
#[derive(Debug, Args)]
pub struct ProbeArgs {
    /// Per-candidate timeout in seconds (overrides config)
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Run the probe command.
pub async fn run(args: ProbeArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let timeout = args.timeout.unwrap_or(config.probe.timeout);

    let probe = TileServerProbe::new(Duration::from_secs(timeout))?;

    println!(
        "Probing {} tile servers ({}s timeout each)...",
        config.probe.servers.len(),
        timeout
    );
    match probe.first_reachable(&config.probe.servers).await {
        Some(url) => println!("First reachable tile server: {}", url),
        None => println!("No tile server reachable"),
    }
    Ok(())
}
