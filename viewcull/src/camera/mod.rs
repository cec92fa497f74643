//! Camera module: view transform, frustum construction, and culling.
//!
//! The frustum is built once per camera setup; the batch culling test
//! runs per frame against the derived planes. Everything here is pure;
//! the host camera object owns all state.

mod view;
mod frustum;
mod cull;

pub use view::{view_transform, transform_vertices};
pub use frustum::{
    Frustum, Plane, FACE_CORNERS,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM,
};
pub use cull::{
    FrustumTest, ClipMask, CullOptions, CullResults,
    classify_aabb, cull_aabbs,
};
