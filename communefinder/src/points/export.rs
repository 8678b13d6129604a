//! GeoJSON export of the user point collection.

use serde::Serialize;

use super::{PointCollection, UserPoint};

#[derive(Serialize)]
struct PointFeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<PointFeature<'a>>,
}

#[derive(Serialize)]
struct PointFeature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: PointGeometry,
    properties: ExportedProperties<'a>,
}

#[derive(Serialize)]
struct PointGeometry {
    #[serde(rename = "type")]
    kind: &'static str,
    /// GeoJSON position order: longitude first.
    coordinates: [f64; 2],
}

#[derive(Serialize)]
struct ExportedProperties<'a> {
    label: &'a str,
    color: &'a str,
    opacity: f64,
    commune: Option<&'a str>,
    shape: String,
}

impl<'a> From<&'a UserPoint> for PointFeature<'a> {
    fn from(point: &'a UserPoint) -> Self {
        Self {
            kind: "Feature",
            geometry: PointGeometry {
                kind: "Point",
                coordinates: [point.position.lon(), point.position.lat()],
            },
            properties: ExportedProperties {
                label: &point.properties.label,
                color: &point.properties.color,
                opacity: point.properties.opacity,
                commune: point.properties.resolved_region.as_deref(),
                shape: point.shape.to_string(),
            },
        }
    }
}

/// Serializes the collection as a GeoJSON feature collection of points.
pub fn export_geojson(points: &PointCollection) -> Result<String, serde_json::Error> {
    let collection = PointFeatureCollection {
        kind: "FeatureCollection",
        features: points.iter().map(PointFeature::from).collect(),
    };
    serde_json::to_string_pretty(&collection)
}
