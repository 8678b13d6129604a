//! Point-in-polygon containment primitive.
//!
//! Argument order is (longitude, latitude) throughout this module, matching
//! the GeoJSON vertex order of the dataset. This is the opposite of the
//! canonical (lat, lon) convention used by the rest of the crate; callers
//! go through [`ContainmentIndex`](super::ContainmentIndex), which performs
//! the axis swap in one place.

use crate::region::{RegionSet, Ring};

/// Even-odd ray casting test against a set of rings.
///
/// A horizontal ray is cast from the point; each ring edge it crosses
/// toggles containment, so holes punched by inner rings fall out naturally.
/// Rings are treated as implicitly closed and rings with fewer than three
/// vertices contribute nothing.
pub fn point_in_rings(lon: f64, lat: f64, rings: &[Ring]) -> bool {
    let mut inside = false;

    for ring in rings {
        let n = ring.len();
        if n < 3 {
            continue;
        }

        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = ring[i];
            let (xj, yj) = ring[j];

            if ((yi > lat) != (yj > lat)) && (lon < (xj - xi) * (lat - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }
    }

    inside
}

/// Returns the insertion indices of every region containing the point,
/// in dataset insertion order.
///
/// A point on a shared boundary of poorly cleaned data may be reported in
/// more than one region; callers decide the tie-break.
pub fn point_in_regions(lon: f64, lat: f64, regions: &RegionSet) -> Vec<usize> {
    regions
        .iter()
        .enumerate()
        .filter(|(_, region)| point_in_rings(lon, lat, region.rings()))
        .map(|(index, _)| index)
        .collect()
}
