/// Host-facing entry points.
///
/// One function per host operation, mirroring the original calling
/// sequences of the camera object's native module. Inputs are the flat
/// arrays the host passes; outputs are the flat arrays it expects back.

use viewcull::{
    cull_aabbs, range_bounds, view_transform,
    Aabb, CullOptions, Error, Frustum, FrustumTest, Result,
};
use crate::marshal;

const SOURCE: &str = "viewcull::host";

/// Distinguished scalar returned to hosts that cannot receive structured
/// errors. Matches the original module's status value.
pub const SHAPE_MISMATCH_SENTINEL: i16 = -3;

/// Map any boundary error to the host's out-of-band sentinel.
pub fn sentinel_code(_error: &Error) -> i16 {
    SHAPE_MISMATCH_SENTINEL
}

/// Log a shape failure before handing it back. The host itself only sees
/// the sentinel, so the log line carries the detail.
fn log_and_return_error(entry_point: &'static str, error: Error) -> Error {
    crate::host_error!(SOURCE, "{}: {}", entry_point, error);
    error
}

// ===== ENTRY POINTS =====

/// Bounding box of a transformed range box.
///
/// Each of the six range/conversion arguments is an (a, b) pair: ranges
/// are (min, max), conversions are (offset, scale). Returns a flat 3×3
/// array: row 0 the min corner, row 1 the max corner, row 2 the host's
/// (1, 1, 1) sentinel row.
pub fn calc_bounding_box(
    x_range: &[f64],
    y_range: &[f64],
    z_range: &[f64],
    x_conv: &[f64],
    y_conv: &[f64],
    z_conv: &[f64],
    transform: &[f64],
) -> Result<[f64; 9]> {
    let run = || -> Result<[f64; 9]> {
        let ranges = [
            marshal::pair("x_range", x_range)?,
            marshal::pair("y_range", y_range)?,
            marshal::pair("z_range", z_range)?,
        ];
        let conv = [
            marshal::pair("x_conv", x_conv)?,
            marshal::pair("y_conv", y_conv)?,
            marshal::pair("z_conv", z_conv)?,
        ];
        let transform = marshal::mat4_from_rows("transform", transform)?;

        let aabb = range_bounds(ranges, conv, &transform);
        let (min, max) = (aabb.min(), aabb.max());
        Ok([
            min.x, min.y, min.z,
            max.x, max.y, max.z,
            1.0, 1.0, 1.0,
        ])
    };
    run().map_err(|e| log_and_return_error("calc_bounding_box", e))
}

/// Compose the world-to-view transform from a rotation matrix, the eye
/// location, and a view-depth offset. Matrices are row-major 16-element
/// arrays on both sides.
pub fn camera_transform(rotation: &[f64], location: &[f64], view_z: f64) -> Result<[f64; 16]> {
    let run = || -> Result<[f64; 16]> {
        let rotation = marshal::mat4_from_rows("rotation", rotation)?;
        let eye = marshal::vec3("location", location)?;
        Ok(marshal::mat4_to_rows(&view_transform(&rotation, eye, view_z)))
    };
    run().map_err(|e| log_and_return_error("camera_transform", e))
}

/// Transform an N×3 vertex batch, with perspective divide. The output is
/// flat `[x, y, z, …]` with the same length and order as the input.
pub fn transform_vertices(vertices: &[f64], transform: &[f64]) -> Result<Vec<f64>> {
    let run = || -> Result<Vec<f64>> {
        let verts = marshal::vec3_batch("vertices", vertices)?;
        let transform = marshal::mat4_from_rows("transform", transform)?;

        let out = viewcull::transform_vertices(verts, &transform);
        Ok(bytemuck::cast_slice(&out).to_vec())
    };
    run().map_err(|e| log_and_return_error("transform_vertices", e))
}

/// Frustum corner vertices (flat 8×3) plus optionally the six derived
/// planes (flat 6×4: normal x, y, z, offset per row).
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumArrays {
    pub vertices: [f64; 24],
    pub planes: Option<[f64; 24]>,
}

/// Build the view frustum from clip depths and half-angle fields of view.
///
/// `z_clip` is the (near, far) pair, `fov` the (horizontal, vertical)
/// half-angles in radians, `eye` the eye offset along z. Planes are only
/// derived when `want_planes` is set; corner-only callers skip the work.
pub fn compute_frustum(
    z_clip: &[f64],
    fov: &[f64],
    eye: f64,
    want_planes: bool,
) -> Result<FrustumArrays> {
    let run = || -> Result<FrustumArrays> {
        let z_clip = marshal::pair("z_clip", z_clip)?;
        let fov = marshal::pair("fov", fov)?;

        if z_clip[0] == z_clip[1] {
            crate::host_warn!(
                SOURCE,
                "compute_frustum: near and far clip depths are equal ({}), frustum is degenerate",
                z_clip[0]
            );
        }

        let frustum = Frustum::from_fov(z_clip, fov, eye);

        let mut vertices = [0.0; 24];
        for (out, corner) in vertices.chunks_exact_mut(3).zip(&frustum.corners) {
            out.copy_from_slice(&corner.to_array());
        }

        let planes = want_planes.then(|| {
            let mut out = [0.0; 24];
            for (row, plane) in out.chunks_exact_mut(4).zip(&frustum.planes()) {
                row[0..3].copy_from_slice(&plane.normal.to_array());
                row[3] = plane.offset;
            }
            out
        });

        Ok(FrustumArrays { vertices, planes })
    };
    run().map_err(|e| log_and_return_error("compute_frustum", e))
}

/// Culling batch output: 1 = inside/intersecting, 0 = outside, plus
/// optional per-box clip masks (bit p set = box straddles plane p).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectArrays {
    pub in_view: Vec<i16>,
    pub clip_masks: Option<Vec<i16>>,
}

/// Test a batch of AABBs (flat N×3 centers + flat N×3 extents) against
/// six frustum planes (flat 6×4).
///
/// `centers` and `extents` must match in length and hold whole 3-vectors;
/// otherwise the shape error maps to the host sentinel via
/// [`sentinel_code`].
pub fn aabb_intersect_frustum(
    centers: &[f64],
    extents: &[f64],
    planes: &[f64],
    options: CullOptions,
) -> Result<IntersectArrays> {
    let run = || -> Result<IntersectArrays> {
        if centers.len() != extents.len() {
            return Err(Error::ShapeMismatch {
                what: "extents",
                expected: centers.len(),
                actual: extents.len(),
            });
        }
        let centers = marshal::vec3_batch("centers", centers)?;
        let extents = marshal::vec3_batch("extents", extents)?;
        let planes = marshal::planes_from_flat("planes", planes)?;

        let boxes: Vec<Aabb> = centers
            .iter()
            .zip(extents)
            .map(|(&center, &half_extents)| Aabb::new(center, half_extents))
            .collect();

        let results = cull_aabbs(&boxes, &planes, options);

        Ok(IntersectArrays {
            in_view: results
                .tests
                .iter()
                .map(|&t| (t == FrustumTest::Inside) as i16)
                .collect(),
            clip_masks: results
                .clip_masks
                .map(|masks| masks.iter().map(|m| m.bits() as i16).collect()),
        })
    };
    run().map_err(|e| log_and_return_error("aabb_intersect_frustum", e))
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
