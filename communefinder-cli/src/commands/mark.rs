//! Mark command - place points, resolve their communes, export GeoJSON.

use clap::Args;

use communefinder::app::{AppController, Command};
use communefinder::config::ConfigFile;
use communefinder::points::{export_geojson, PointShape};

use super::common::{load_dataset, parse_point_spec};
use crate::error::CliError;

/// Arguments for the mark command.
#[derive(Debug, Args)]
pub struct MarkArgs {
    /// Points to place, each as LAT,LON[,LABEL]
    #[arg(required = true, allow_hyphen_values = true)]
    pub points: Vec<String>,

    /// Output file for the GeoJSON feature collection
    #[arg(long, default_value = "points.geojson")]
    pub output: String,

    /// Marker shape
    #[arg(long, value_enum, default_value = "circle")]
    pub shape: MarkerShape,

    /// Override the configured dataset URL
    #[arg(long)]
    pub url: Option<String>,

    /// Use the embedded fallback outlines instead of fetching
    #[arg(long)]
    pub offline: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum MarkerShape {
    Circle,
    Square,
}

impl From<&MarkerShape> for PointShape {
    fn from(shape: &MarkerShape) -> Self {
        match shape {
            MarkerShape::Circle => PointShape::Circle,
            MarkerShape::Square => PointShape::Square,
        }
    }
}

/// Run the mark command.
pub async fn run(args: MarkArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;

    let mut controller = AppController::new();
    let loaded = load_dataset(&config, args.url, args.offline).await?;
    controller.handle(Command::DatasetLoaded(loaded));

    for spec in &args.points {
        let Some((lat, lon, label)) = parse_point_spec(spec) else {
            eprintln!("Skipping '{}': expected LAT,LON[,LABEL]", spec);
            continue;
        };

        controller.handle(Command::PlacePoint {
            lat,
            lon,
            shape: (&args.shape).into(),
            label,
            color: config.style.marker_color.clone(),
            opacity: config.style.marker_opacity,
        });
    }

    for point in controller.points().iter() {
        let commune = point
            .properties
            .resolved_region
            .as_deref()
            .unwrap_or("no commune");
        println!("{}  ->  {}", point.position, commune);
    }

    let geojson = export_geojson(controller.points()).map_err(|e| CliError::FileWrite {
        path: args.output.clone(),
        error: std::io::Error::other(e),
    })?;
    std::fs::write(&args.output, geojson).map_err(|e| CliError::FileWrite {
        path: args.output.clone(),
        error: e,
    })?;

    println!();
    println!(
        "Exported {} points to {}",
        controller.points().len(),
        args.output
    );
    Ok(())
}
