//! Polygon containment testing.
//!
//! [`point_in_regions`] is the raw primitive in (longitude, latitude)
//! argument order; [`ContainmentIndex`] is the canonical-point façade the
//! rest of the crate uses.

mod adapter;
mod pip;

pub use adapter::ContainmentIndex;
pub use pip::{point_in_regions, point_in_rings};
