//! Dataset command - inspect the commune dataset.

use clap::Args;

use communefinder::config::ConfigFile;

use super::common::load_dataset;
use crate::error::CliError;

/// Arguments for the dataset command.
#[derive(Debug, Args)]
pub struct DatasetArgs {
    /// Override the configured dataset URL
    #[arg(long)]
    pub url: Option<String>,

    /// Use the embedded fallback outlines instead of fetching
    #[arg(long)]
    pub offline: bool,

    /// List every commune name
    #[arg(long)]
    pub names: bool,
}

/// Run the dataset command.
pub async fn run(args: DatasetArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let loaded = load_dataset(&config, args.url, args.offline).await?;

    println!("Source:   {}", loaded.source);
    println!("Communes: {}", loaded.regions.len());

    if args.names {
        println!();
        for region in loaded.regions.iter() {
            println!("  {}", region.name());
        }
    }
    Ok(())
}
