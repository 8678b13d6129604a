//! Convert command - decimal degrees ↔ degrees-minutes-seconds.

use clap::Args;

use communefinder::app::LookupError;
use communefinder::coord::{decimal_to_dms, validate};
use communefinder::parse::parse_dms_text;

use crate::error::CliError;

/// Arguments for the convert command.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Decimal latitude to convert to DMS (requires --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Decimal longitude to convert to DMS (requires --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// DMS string to convert to decimal degrees
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub dms: Option<String>,
}

/// Run the convert command.
pub fn run(args: ConvertArgs) -> Result<(), CliError> {
    match (args.lat, args.lon, args.dms) {
        (Some(lat), Some(lon), _) => {
            let point = validate(lat, lon)
                .map_err(|e| CliError::Lookup(LookupError::Range(e)))?;
            println!(
                "{} {}",
                decimal_to_dms(point.lat()),
                decimal_to_dms(point.lon())
            );
        }
        (_, _, Some(text)) => {
            let (lat, lon) =
                parse_dms_text(&text).map_err(|e| CliError::Lookup(LookupError::Parse(e)))?;
            let point =
                validate(lat, lon).map_err(|e| CliError::Lookup(LookupError::Range(e)))?;
            println!("{}", point);
        }
        _ => {
            eprintln!("Nothing to convert: pass --lat/--lon or --dms");
            std::process::exit(2);
        }
    }
    Ok(())
}
