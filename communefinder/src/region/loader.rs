//! Commune dataset loading.
//!
//! The dataset is fetched once over HTTP and parsed in full; loading is
//! all-or-nothing, so a lookup either sees the complete dataset or none of
//! it. On fetch failure the loader degrades to the embedded fallback
//! outlines compiled into the crate.

use std::future::Future;
use thiserror::Error;
use tracing::{info, warn};

use super::geojson::{parse_feature_collection, GeoJsonError};
use super::model::RegionSet;

/// Coarse commune outlines bundled as the offline fallback.
const FALLBACK_DATASET: &str = include_str!("communes_fallback.geojson");

/// Name property used by the bundled fallback dataset.
const FALLBACK_NAME_PROPERTY: &str = "nom";

/// Error type for dataset loading.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),
    #[error("dataset request failed: {0}")]
    Http(String),
    #[error("dataset request returned HTTP {0}")]
    Status(u16),
    #[error("dataset is not valid UTF-8")]
    Encoding,
    #[error(transparent)]
    GeoJson(#[from] GeoJsonError),
}

/// Where a loaded dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// Fetched from the configured URL.
    Network,
    /// The embedded fallback outlines.
    Embedded,
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Embedded => write!(f, "embedded fallback"),
        }
    }
}

/// A fully loaded dataset together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub regions: RegionSet,
    pub source: DatasetSource,
}

/// Trait for asynchronous HTTP fetches.
///
/// This abstraction allows dependency injection of mock clients in tests,
/// so loader behavior can be exercised without a network.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an HTTP GET request and returns the response body.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, DatasetError>> + Send;
}

/// HTTP client backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new client.
    pub fn new() -> Result<Self, DatasetError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("communefinder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DatasetError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl AsyncHttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, DatasetError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DatasetError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DatasetError::Http(e.to_string()))?;
        Ok(body.to_vec())
    }
}

/// Loads the commune dataset from a URL, degrading to the embedded
/// fallback when the fetch or parse fails.
#[derive(Debug)]
pub struct DatasetLoader<C> {
    client: C,
    url: String,
    name_property: String,
}

impl<C: AsyncHttpClient> DatasetLoader<C> {
    /// Create a loader for a dataset URL.
    ///
    /// `name_property` is the feature property holding the commune name
    /// (`nom` in the French open-data exports).
    pub fn new(client: C, url: impl Into<String>, name_property: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            name_property: name_property.into(),
        }
    }

    /// Load the dataset, falling back to the embedded outlines on failure.
    ///
    /// Only fails when both the network fetch and the fallback are
    /// unusable; callers should treat that as the degraded no-dataset mode.
    pub async fn load(&self) -> Result<LoadedDataset, DatasetError> {
        match self.fetch_remote().await {
            Ok(regions) => {
                info!(count = regions.len(), url = %self.url, "Loaded commune dataset");
                Ok(LoadedDataset {
                    regions,
                    source: DatasetSource::Network,
                })
            }
            Err(e) => {
                warn!(error = %e, url = %self.url, "Dataset fetch failed, using embedded fallback");
                let regions = embedded_dataset()?;
                Ok(LoadedDataset {
                    regions,
                    source: DatasetSource::Embedded,
                })
            }
        }
    }

    async fn fetch_remote(&self) -> Result<RegionSet, DatasetError> {
        let body = self.client.get(&self.url).await?;
        let text = String::from_utf8(body).map_err(|_| DatasetError::Encoding)?;
        Ok(parse_feature_collection(&text, &self.name_property)?)
    }
}

/// Parse the embedded fallback outlines.
pub fn embedded_dataset() -> Result<RegionSet, DatasetError> {
    let regions = parse_feature_collection(FALLBACK_DATASET, FALLBACK_NAME_PROPERTY)?;
    info!(count = regions.len(), "Loaded embedded fallback dataset");
    Ok(regions)
}
