//! Typed adapter over the containment primitive.

use super::pip::point_in_regions;
use crate::coord::CanonicalPoint;
use crate::region::{Region, RegionSet};

/// Containment queries in canonical (lat, lon) terms.
///
/// The underlying primitive takes (longitude, latitude); this adapter owns
/// that axis swap so no call site ever passes raw coordinates in the wrong
/// order.
#[derive(Debug, Clone, Copy)]
pub struct ContainmentIndex<'a> {
    regions: &'a RegionSet,
}

impl<'a> ContainmentIndex<'a> {
    /// Wrap a loaded dataset.
    pub fn new(regions: &'a RegionSet) -> Self {
        Self { regions }
    }

    /// Insertion indices of every region containing the point, in dataset
    /// insertion order.
    pub fn containing_indices(&self, point: &CanonicalPoint) -> Vec<usize> {
        point_in_regions(point.lon(), point.lat(), self.regions)
    }

    /// Regions containing the point, in dataset insertion order.
    pub fn containing(&self, point: &CanonicalPoint) -> Vec<&'a Region> {
        self.containing_indices(point)
            .into_iter()
            .filter_map(|index| self.regions.get(index))
            .collect()
    }
}
