//! Point-to-commune resolution.

use crate::coord::CanonicalPoint;
use crate::geometry::ContainmentIndex;
use crate::region::{Region, RegionSet};

/// Resolves which commune contains a point.
///
/// When boundary overlaps in poorly cleaned data put a point inside more
/// than one polygon, the region inserted earliest in the dataset wins.
/// That tie-break is positional and deterministic, never a geometric
/// "best match". An empty result is a normal negative outcome.
pub fn resolve_containing_index(point: &CanonicalPoint, regions: &RegionSet) -> Option<usize> {
    ContainmentIndex::new(regions)
        .containing_indices(point)
        .into_iter()
        .next()
}

/// As [`resolve_containing_index`], returning the region record.
pub fn resolve_containing<'a>(point: &CanonicalPoint, regions: &'a RegionSet) -> Option<&'a Region> {
    resolve_containing_index(point, regions).and_then(|index| regions.get(index))
}
