/// Batch AABB/frustum intersection testing.
///
/// Positive-extent projection test: each box's half-extents are projected
/// onto every plane normal and compared against the signed distance of
/// the box center. Each box is tested independently with no cross-box
/// state, so the batch loop is safe to parallelize.

use bitflags::bitflags;
use crate::bounds::Aabb;
use super::frustum::Plane;

/// Result of testing one AABB against the six frustum planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Entirely outside at least one plane
    Outside,
    /// Inside or straddling every plane
    Inside,
}

bitflags! {
    /// Which frustum planes a box straddles, one bit per plane in
    /// FACE_CORNERS order (bit p = plane p).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ClipMask: u16 {
        const NEAR = 1 << 0;
        const FAR = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const TOP = 1 << 4;
        const BOTTOM = 1 << 5;
    }
}

/// Options for a culling batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct CullOptions {
    /// Record per-box clip masks.
    pub clip_masks: bool,

    /// Keep testing the remaining planes after a box is rejected so its
    /// clip mask covers all six planes. Off by default: rejection
    /// short-circuits, and an Outside box's mask only records planes
    /// tested before the rejecting one.
    pub full_masks: bool,
}

/// Results of a culling batch, index-aligned with the input boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct CullResults {
    pub tests: Vec<FrustumTest>,
    /// Present when `CullOptions::clip_masks` was set
    pub clip_masks: Option<Vec<ClipMask>>,
}

/// Test one box against the six planes.
///
/// Per plane, `np` is the box half-extent projected onto the plane
/// normal and `mp` the signed distance of the box center:
/// `mp + np < 0` puts the whole box on the exterior side of that plane;
/// `mp − np < 0` (with the box not rejected) means the box straddles it.
/// With `full_mask` unset the first rejection stops the scan.
pub fn classify_aabb(
    aabb: &Aabb,
    planes: &[Plane; 6],
    full_mask: bool,
) -> (FrustumTest, ClipMask) {
    let mut test = FrustumTest::Inside;
    let mut mask = ClipMask::empty();

    for (p, plane) in planes.iter().enumerate() {
        let np = aabb.half_extents.dot(plane.normal.abs());
        let mp = plane.signed_distance(aabb.center);

        if mp + np < 0.0 {
            test = FrustumTest::Outside;
            if !full_mask {
                break;
            }
            // Fully outside this plane is not a straddle
            continue;
        }

        if mp - np < 0.0 {
            mask |= ClipMask::from_bits_truncate(1 << p);
        }
    }

    (test, mask)
}

/// Test a batch of boxes against the six frustum planes.
///
/// Results are index-aligned with `boxes`; permuting the input permutes
/// the output identically.
pub fn cull_aabbs(boxes: &[Aabb], planes: &[Plane; 6], options: CullOptions) -> CullResults {
    let mut tests = Vec::with_capacity(boxes.len());
    let mut clip_masks = options
        .clip_masks
        .then(|| Vec::with_capacity(boxes.len()));

    for aabb in boxes {
        let (test, mask) = classify_aabb(aabb, planes, options.clip_masks && options.full_masks);
        tests.push(test);
        if let Some(masks) = &mut clip_masks {
            masks.push(mask);
        }
    }

    CullResults { tests, clip_masks }
}

#[cfg(test)]
#[path = "cull_tests.rs"]
mod tests;
