//! User-placed points.
//!
//! The collection is the exclusive owner of every [`UserPoint`]; regions
//! never reference points. Identifiers are assigned monotonically and are
//! never reused, even after deletions.

mod export;

pub use export::export_geojson;

use std::fmt;

use crate::coord::CanonicalPoint;

/// Marker shape for a user point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointShape {
    Circle,
    Square,
}

impl fmt::Display for PointShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Square => write!(f, "square"),
        }
    }
}

/// Presentation attributes of a user point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointProperties {
    pub label: String,
    /// CSS color of the marker.
    pub color: String,
    /// Marker opacity as a fraction; clamped to [0, 1] on construction.
    pub opacity: f64,
    /// Name of the commune containing the point, when one was resolved.
    pub resolved_region: Option<String>,
}

impl PointProperties {
    pub fn new(
        label: impl Into<String>,
        color: impl Into<String>,
        opacity: f64,
        resolved_region: Option<String>,
    ) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            opacity: opacity.clamp(0.0, 1.0),
            resolved_region,
        }
    }
}

/// A user-placed marker.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPoint {
    pub id: u64,
    pub position: CanonicalPoint,
    pub shape: PointShape,
    pub visible: bool,
    pub properties: PointProperties,
}

/// A partial update to a user point. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointEdit {
    pub position: Option<CanonicalPoint>,
    pub shape: Option<PointShape>,
    pub visible: Option<bool>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
}

/// The in-memory collection of user points.
#[derive(Debug, Clone, Default)]
pub struct PointCollection {
    points: Vec<UserPoint>,
    next_id: u64,
}

impl PointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new point and return its assigned id.
    pub fn place(
        &mut self,
        position: CanonicalPoint,
        shape: PointShape,
        properties: PointProperties,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.points.push(UserPoint {
            id,
            position,
            shape,
            visible: true,
            properties,
        });
        id
    }

    /// Apply a partial edit. Returns whether the position changed, so the
    /// caller knows to re-resolve the containing commune; `None` when the
    /// id is unknown.
    pub fn edit(&mut self, id: u64, edit: PointEdit) -> Option<bool> {
        let point = self.points.iter_mut().find(|p| p.id == id)?;

        let mut position_changed = false;
        if let Some(position) = edit.position {
            position_changed = position != point.position;
            point.position = position;
        }
        if let Some(shape) = edit.shape {
            point.shape = shape;
        }
        if let Some(visible) = edit.visible {
            point.visible = visible;
        }
        if let Some(label) = edit.label {
            point.properties.label = label;
        }
        if let Some(color) = edit.color {
            point.properties.color = color;
        }
        if let Some(opacity) = edit.opacity {
            point.properties.opacity = opacity.clamp(0.0, 1.0);
        }

        Some(position_changed)
    }

    /// Record the re-resolved commune for a point.
    pub fn set_resolved_region(&mut self, id: u64, region: Option<String>) {
        if let Some(point) = self.points.iter_mut().find(|p| p.id == id) {
            point.properties.resolved_region = region;
        }
    }

    /// Remove a point, returning it when the id existed.
    pub fn remove(&mut self, id: u64) -> Option<UserPoint> {
        let index = self.points.iter().position(|p| p.id == id)?;
        Some(self.points.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&UserPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate points in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &UserPoint> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::validate;

    fn props(label: &str) -> PointProperties {
        PointProperties::new(label, "#e5534b", 0.9, None)
    }

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut points = PointCollection::new();
        let position = validate(-22.27, 166.44).unwrap();

        let a = points.place(position, PointShape::Circle, props("a"));
        let b = points.place(position, PointShape::Circle, props("b"));
        assert!(b > a);

        points.remove(a);
        let c = points.place(position, PointShape::Square, props("c"));
        assert!(c > b, "removed ids must not be reassigned");
    }

    #[test]
    fn test_new_points_are_visible() {
        let mut points = PointCollection::new();
        let id = points.place(
            validate(-22.27, 166.44).unwrap(),
            PointShape::Circle,
            props("p"),
        );
        assert!(points.get(id).unwrap().visible);
    }

    #[test]
    fn test_edit_reports_position_change() {
        let mut points = PointCollection::new();
        let id = points.place(
            validate(-22.27, 166.44).unwrap(),
            PointShape::Circle,
            props("p"),
        );

        let changed = points.edit(
            id,
            PointEdit {
                label: Some("renamed".to_string()),
                ..PointEdit::default()
            },
        );
        assert_eq!(changed, Some(false));

        let changed = points.edit(
            id,
            PointEdit {
                position: Some(validate(-21.5, 165.5).unwrap()),
                ..PointEdit::default()
            },
        );
        assert_eq!(changed, Some(true));
        assert_eq!(points.get(id).unwrap().properties.label, "renamed");
    }

    #[test]
    fn test_edit_to_same_position_is_not_a_change() {
        let mut points = PointCollection::new();
        let position = validate(-22.27, 166.44).unwrap();
        let id = points.place(position, PointShape::Circle, props("p"));

        let changed = points.edit(
            id,
            PointEdit {
                position: Some(position),
                ..PointEdit::default()
            },
        );
        assert_eq!(changed, Some(false));
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut points = PointCollection::new();
        assert_eq!(points.edit(42, PointEdit::default()), None);
    }

    #[test]
    fn test_opacity_is_clamped() {
        let mut points = PointCollection::new();
        let id = points.place(
            validate(-22.27, 166.44).unwrap(),
            PointShape::Circle,
            PointProperties::new("p", "#fff", 1.7, None),
        );
        assert_eq!(points.get(id).unwrap().properties.opacity, 1.0);

        points.edit(
            id,
            PointEdit {
                opacity: Some(-0.2),
                ..PointEdit::default()
            },
        );
        assert_eq!(points.get(id).unwrap().properties.opacity, 0.0);
    }

    #[test]
    fn test_remove() {
        let mut points = PointCollection::new();
        let id = points.place(
            validate(-22.27, 166.44).unwrap(),
            PointShape::Circle,
            props("p"),
        );

        let removed = points.remove(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(points.is_empty());
        assert!(points.remove(id).is_none());
    }
}
