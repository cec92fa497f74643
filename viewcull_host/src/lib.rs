/*!
# Viewcull host boundary

Flat-array adapters exposing the `viewcull` geometry kernel to a
numerical scripting host. The host passes row-major double matrices,
N×3 vertex batches, and 6×4 plane arrays as flat slices; this crate
validates shapes, converts to glam types, runs the core routines, and
converts the results back to the host layout.

Errors are the core's structured [`Error`] kinds. Hosts that can only
receive a scalar status use [`sentinel_code`] to map any error to the
distinguished out-of-band value (−3). Shape failures are also logged
through the [`log`] module since the sentinel itself carries no detail.
*/

pub mod log;
mod marshal;
mod api;

pub use api::{
    calc_bounding_box, camera_transform, transform_vertices,
    compute_frustum, aabb_intersect_frustum,
    FrustumArrays, IntersectArrays,
    sentinel_code, SHAPE_MISMATCH_SENTINEL,
};

// Culling options are part of the boundary signature
pub use viewcull::CullOptions;

pub use viewcull::{Error, Result};
