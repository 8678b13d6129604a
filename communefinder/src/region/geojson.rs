//! GeoJSON feature-collection parsing for the commune dataset.
//!
//! The dataset is a `FeatureCollection` of `Polygon` / `MultiPolygon`
//! features with the commune name in a configurable property (the French
//! open-data exports use `nom`). Features without a usable name or without
//! any ring are skipped with a warning rather than failing the whole load.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use super::model::{Region, RegionSet, Ring};

/// Error type for dataset document parsing.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a FeatureCollection, found '{0}'")]
    NotAFeatureCollection(String),
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: HashMap<String, Value>,
    geometry: Option<Geometry>,
}

/// Supported geometry types. Coordinates are in GeoJSON (longitude,
/// latitude) vertex order.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<(f64, f64)>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<(f64, f64)>>> },
    #[serde(other)]
    Unsupported,
}

/// Parse a GeoJSON document into a [`RegionSet`].
///
/// Features are kept in document order, which becomes the dataset insertion
/// order. Unusable features are skipped with a warning.
pub fn parse_feature_collection(json: &str, name_property: &str) -> Result<RegionSet, GeoJsonError> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    if collection.kind != "FeatureCollection" {
        return Err(GeoJsonError::NotAFeatureCollection(collection.kind));
    }

    let mut regions = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        match to_region(feature, name_property) {
            Some(region) => regions.push(region),
            None => {
                tracing::warn!(index, "Skipping feature without usable name or rings");
            }
        }
    }

    Ok(RegionSet::from_regions(regions))
}

fn to_region(feature: Feature, name_property: &str) -> Option<Region> {
    let name = feature
        .properties
        .get(name_property)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())?
        .to_string();

    let rings: Vec<Ring> = match feature.geometry? {
        Geometry::Polygon { coordinates } => coordinates,
        Geometry::MultiPolygon { coordinates } => coordinates.into_iter().flatten().collect(),
        Geometry::Unsupported => return None,
    };
    if rings.is_empty() {
        return None;
    }

    Some(Region::new(name, rings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_polygon_feature() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"nom": "Nouméa"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[166.0, -22.0], [167.0, -22.0], [167.0, -21.0], [166.0, -21.0], [166.0, -22.0]]]
                }
            }]
        }"#;

        let set = parse_feature_collection(json, "nom").unwrap();
        assert_eq!(set.len(), 1);
        let region = set.get(0).unwrap();
        assert_eq!(region.name(), "Nouméa");
        assert_eq!(region.rings().len(), 1);
        assert_eq!(region.rings()[0][0], (166.0, -22.0));
    }

    #[test]
    fn test_parse_multipolygon_flattens_rings() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"nom": "Poum"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[163.0, -20.0], [164.0, -20.0], [164.0, -19.5], [163.0, -19.5]]],
                        [[[163.2, -20.3], [163.4, -20.3], [163.4, -20.1], [163.2, -20.1]]]
                    ]
                }
            }]
        }"#;

        let set = parse_feature_collection(json, "nom").unwrap();
        assert_eq!(set.get(0).unwrap().rings().len(), 2);
    }

    #[test]
    fn test_features_without_name_are_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]}},
                {"type": "Feature", "properties": {"nom": "  "}, "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]}},
                {"type": "Feature", "properties": {"nom": "Thio"}, "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]}}
            ]
        }"#;

        let set = parse_feature_collection(json, "nom").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().name(), "Thio");
    }

    #[test]
    fn test_features_without_geometry_are_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"nom": "Ghost"}, "geometry": null}
            ]
        }"#;

        let set = parse_feature_collection(json, "nom").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_unsupported_geometry_is_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"nom": "Dot"}, "geometry": {"type": "Point", "coordinates": [166.0, -22.0]}}
            ]
        }"#;

        let set = parse_feature_collection(json, "nom").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_rejects_non_feature_collection() {
        let json = r#"{"type": "Feature", "properties": {}, "geometry": null}"#;
        let err = parse_feature_collection(json, "nom");
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let json = r#"{"type": "FeatureCollection", "features": []}"#;
        let set = parse_feature_collection(json, "nom").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_name_property_is_configurable() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "Canala"},
                "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]}
            }]
        }"#;

        let set = parse_feature_collection(json, "name").unwrap();
        assert_eq!(set.get(0).unwrap().name(), "Canala");
    }
}
