/*!
# Viewcull

Camera/frustum geometry kernel for view-frustum culling.

This crate provides the double-precision geometric routines behind a
scripting host's camera object: view-transform composition, batch vertex
transformation with perspective divide, frustum construction from clip
depths and field-of-view angles, plane derivation from frustum faces,
range-box AABB computation, and batch AABB/frustum intersection testing
with clip masks.

## Architecture

- **math**: homogeneous transform application and Newell polygon normals
- **bounds**: AABB type (center + half-extents) and range-box bounds
- **camera**: view transform, frustum construction, visibility culling

All routines are pure and stateless: inputs in, results out, nothing
cached between calls. The flat-array host boundary lives in the
`viewcull_host` crate.
*/

mod error;
pub mod math;
pub mod bounds;
pub mod camera;

pub use error::{Error, Result};
pub use bounds::{Aabb, range_bounds};
pub use camera::{
    Frustum, Plane, FACE_CORNERS,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM,
    FrustumTest, ClipMask, CullOptions, CullResults,
    classify_aabb, cull_aabbs,
    view_transform, transform_vertices,
};

// Re-export math library at crate root
pub use glam;
