/// Axis-aligned bounding boxes.
///
/// The AABB representation is center + half-extents, which is what the
/// positive-extent projection test in the culling module consumes
/// directly. Min/max corners are derived on demand.

use glam::{DMat4, DVec3};
use crate::math::apply_point;

/// Axis-aligned bounding box as center + half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Box center
    pub center: DVec3,
    /// Half-extent along each axis (non-negative for a well-formed box)
    pub half_extents: DVec3,
}

impl Aabb {
    pub fn new(center: DVec3, half_extents: DVec3) -> Self {
        Self { center, half_extents }
    }

    /// Build from min/max corners.
    pub fn from_min_max(min: DVec3, max: DVec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_extents: (max - min) * 0.5,
        }
    }

    /// Minimum corner (x, y, z).
    pub fn min(&self) -> DVec3 {
        self.center - self.half_extents
    }

    /// Maximum corner (x, y, z).
    pub fn max(&self) -> DVec3 {
        self.center + self.half_extents
    }
}

/// Bounding box of a transformed range box.
///
/// `ranges` holds the (min, max) data range per axis and `coord_conv` the
/// per-axis (offset, scale) conversion applied on top of `transform`,
/// i.e. each corner v goes through `offset + scale · (transform · v)`.
/// All 8 corners of the range box are transformed (with perspective
/// divide) and min/max accumulated into the result.
pub fn range_bounds(
    ranges: [[f64; 2]; 3],
    coord_conv: [[f64; 2]; 3],
    transform: &DMat4,
) -> Aabb {
    let conv = DMat4::from_translation(DVec3::new(
        coord_conv[0][0],
        coord_conv[1][0],
        coord_conv[2][0],
    )) * DMat4::from_scale(DVec3::new(
        coord_conv[0][1],
        coord_conv[1][1],
        coord_conv[2][1],
    ));
    let combined = conv * *transform;

    let corner = |n: usize| {
        DVec3::new(
            ranges[0][n & 1],
            ranges[1][(n >> 1) & 1],
            ranges[2][(n >> 2) & 1],
        )
    };

    let first = apply_point(&combined, corner(0));
    let mut min = first;
    let mut max = first;

    for n in 1..8 {
        let vert = apply_point(&combined, corner(n));
        min = min.min(vert);
        max = max.max(vert);
    }

    Aabb::from_min_max(min, max)
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
