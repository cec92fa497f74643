/// View transform composition and vertex batch transformation.

use glam::{DMat4, DVec3};
use crate::math::apply_point;

/// Compose a world-to-view transform from a rotation matrix, the eye
/// location, and a view-depth offset.
///
/// Equivalent to `T2 · (rotation · T1)` where `T1` translates by `-eye`
/// and `T2` translates by `(0, 0, view_depth)`: the eye is moved to the
/// origin, the camera rotation applied, then the scene pushed out along
/// z to the viewing depth.
///
/// The rotation matrix is used as given; orthogonality is the caller's
/// responsibility.
pub fn view_transform(rotation: &DMat4, eye: DVec3, view_depth: f64) -> DMat4 {
    let to_origin = DMat4::from_translation(-eye);
    let to_depth = DMat4::from_translation(DVec3::new(0.0, 0.0, view_depth));

    to_depth * (*rotation * to_origin)
}

/// Transform a batch of 3D points, dehomogenizing each result.
///
/// Order is preserved and elements are independent; there is no
/// cross-element state.
pub fn transform_vertices(vertices: &[DVec3], transform: &DMat4) -> Vec<DVec3> {
    vertices.iter().map(|v| apply_point(transform, *v)).collect()
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
