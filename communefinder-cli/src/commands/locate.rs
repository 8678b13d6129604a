//! Locate command - resolve a coordinate or commune name.

use clap::Args;

use communefinder::app::{AppController, Command, Effect};
use communefinder::config::ConfigFile;

use super::common::load_dataset;
use crate::error::CliError;

/// Arguments for the locate command.
#[derive(Debug, Args)]
pub struct LocateArgs {
    /// Free text: a decimal "lat, lon" pair, a DMS string like
    /// 20°44'19.7"S 164°47'41.6"E, or a commune name
    pub query: Option<String>,

    /// Decimal latitude (requires --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Decimal longitude (requires --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<String>,

    /// Override the configured dataset URL
    #[arg(long)]
    pub url: Option<String>,

    /// Use the embedded fallback outlines instead of fetching
    #[arg(long)]
    pub offline: bool,
}

/// Run the locate command.
pub async fn run(args: LocateArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;

    let mut controller = AppController::new();
    let loaded = load_dataset(&config, args.url, args.offline).await?;
    println!(
        "Loaded {} communes ({})",
        loaded.regions.len(),
        loaded.source
    );
    controller.handle(Command::DatasetLoaded(loaded));

    let command = match (args.lat, args.lon, args.query) {
        (Some(lat), Some(lon), _) => Command::FieldLookup { lat, lon },
        // Degree marks only appear in DMS strings; route them directly
        (_, _, Some(query)) if query.contains('°') => Command::DmsTextLookup(query),
        (_, _, Some(query)) => Command::Lookup(query),
        _ => {
            eprintln!("Nothing to look up: pass a query or --lat/--lon");
            std::process::exit(2);
        }
    };

    for effect in controller.handle(command) {
        render(&effect)?;
    }
    Ok(())
}

fn render(effect: &Effect) -> Result<(), CliError> {
    match effect {
        Effect::LookupResult {
            point,
            region: Some(region),
        } => {
            println!("{} is in {}", point, region);
        }
        Effect::LookupResult {
            point,
            region: None,
        } => {
            println!("No commune contains {}", point);
        }
        Effect::NameLookupResult {
            region: Some(region),
            ..
        } => {
            println!("Matched commune: {}", region);
        }
        Effect::NameLookupResult {
            query,
            region: None,
        } => {
            println!("No commune name matches '{}'", query);
        }
        Effect::LookupFailed(e) => {
            return Err(CliError::Lookup(e.clone()));
        }
        // View intents are meaningless on a terminal
        _ => {}
    }
    Ok(())
}
