//! Shared helpers for command implementations.

use communefinder::config::ConfigFile;
use communefinder::region::{
    embedded_dataset, DatasetLoader, DatasetSource, LoadedDataset, ReqwestClient,
};

use crate::error::CliError;

/// Load the commune dataset for a command.
///
/// `--offline` skips the network entirely and uses the embedded outlines;
/// otherwise the configured (or overridden) URL is fetched, with the
/// loader's own fallback behavior on failure.
pub async fn load_dataset(
    config: &ConfigFile,
    url_override: Option<String>,
    offline: bool,
) -> Result<LoadedDataset, CliError> {
    if offline {
        let regions = embedded_dataset()?;
        return Ok(LoadedDataset {
            regions,
            source: DatasetSource::Embedded,
        });
    }

    let client = ReqwestClient::new()?;
    let url = url_override.unwrap_or_else(|| config.dataset.url.clone());
    let loader = DatasetLoader::new(client, url, config.dataset.name_property.clone());
    Ok(loader.load().await?)
}

/// Parse a `LAT,LON[,LABEL]` argument.
pub fn parse_point_spec(spec: &str) -> Option<(f64, f64, String)> {
    let mut parts = spec.splitn(3, ',');
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    let lon: f64 = parts.next()?.trim().parse().ok()?;
    let label = parts.next().map(str::trim).unwrap_or("").to_string();
    Some((lat, lon, label))
}
