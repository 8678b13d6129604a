//! Commune region dataset: model, GeoJSON parsing and loading.
//!
//! Loading is all-or-nothing: the application either holds a complete
//! [`RegionSet`] or none at all, so there are no partial-dataset races. On
//! fetch failure the loader degrades to a coarse embedded fallback.

mod geojson;
mod loader;
mod model;

pub use geojson::{parse_feature_collection, GeoJsonError};
pub use loader::{
    embedded_dataset, AsyncHttpClient, DatasetError, DatasetLoader, DatasetSource, LoadedDataset,
    ReqwestClient,
};
pub use model::{Region, RegionSet, Ring};
