/// Homogeneous transform application and polygon normals.
///
/// The scalar building blocks shared by the bounds and camera modules.
/// Vector/matrix arithmetic itself comes from glam; glam's value-returning
/// operators also make chained multiplies alias-safe (each product is
/// computed into a fresh value, never in place).

use glam::{DMat4, DVec3, DVec4};

/// Drop a homogeneous point back to 3D.
///
/// If `w` is neither 0 nor 1 the first three components are divided by it
/// (perspective divide); otherwise they are returned as-is. Every
/// projective point produced by this crate is dehomogenized through this
/// rule; callers must not skip it.
pub fn dehomogenize(v: DVec4) -> DVec3 {
    if v.w != 0.0 && v.w != 1.0 {
        v.truncate() / v.w
    } else {
        v.truncate()
    }
}

/// Apply a 4×4 transform to a homogeneous point and dehomogenize.
pub fn apply(m: &DMat4, v: DVec4) -> DVec3 {
    dehomogenize(*m * v)
}

/// Apply a 4×4 transform to a 3D point (implicit w = 1) and dehomogenize.
pub fn apply_point(m: &DMat4, p: DVec3) -> DVec3 {
    dehomogenize(*m * p.extend(1.0))
}

/// Unnormalized normal of a planar polygon (Newell's method, fanned
/// from the first vertex).
///
/// Correct and stable for convex, near-planar polygons; here the input is
/// always a triangle or quad face of a frustum. The magnitude is twice
/// the polygon area and is consistent across faces built the same way,
/// which is all the culling test needs since only the sign of subsequent
/// dot products matters. Callers must not rely on unit length.
///
/// Assumes at least 3 vertices.
pub fn polygon_normal(verts: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    let mut to_prev = verts[1] - verts[0];

    for vert in &verts[2..] {
        let to_this = *vert - verts[0];
        normal += to_prev.cross(to_this);
        to_prev = to_this;
    }

    normal
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
