/// Frustum: eight corner vertices and six derived planes.
///
/// Built in view space from clip depths and half-angle fields of view
/// rather than extracted from a projection matrix: the host camera object
/// needs the actual corner vertices as well as the planes.

use glam::DVec3;
use crate::math::polygon_normal;

/// Frustum plane indices (FACE_CORNERS order)
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_TOP: usize = 4;
pub const PLANE_BOTTOM: usize = 5;

/// Face → corner connectivity, three corners per face in winding order.
///
/// Corner indices 0–3 are the near plane (top-left, top-right,
/// bottom-right, bottom-left), 4–7 the far plane in the same winding.
/// The winding is fixed so that the Newell normal of each triple points
/// toward the frustum interior for the conventional camera setup
/// (negative clip depths, eye at or above zero); the culling sign
/// convention comes from this table, never from ad-hoc per-face math.
pub const FACE_CORNERS: [[usize; 3]; 6] = [
    [0, 1, 2], // near
    [4, 7, 6], // far
    [7, 4, 0], // left
    [6, 2, 1], // right
    [0, 4, 5], // top
    [2, 6, 7], // bottom
];

/// A frustum face plane: `normal · x + offset = 0`.
///
/// Normals are unnormalized Newell output and point toward the frustum
/// interior: points strictly inside the frustum satisfy
/// `normal · x + offset > 0` for every face. The intersection test in
/// the culling module depends on this sign convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub offset: f64,
}

impl Plane {
    /// Signed distance-like value of a point: positive on the interior
    /// side, zero on the plane. Scaled by the normal's magnitude.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.offset
    }
}

/// View-space frustum as 8 ordered corner vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// 4 near-plane corners then 4 far-plane corners, FACE_CORNERS winding
    pub corners: [DVec3; 8],
}

impl Frustum {
    /// Build a frustum from clip depths and half-angle fields of view.
    ///
    /// `z_clip` holds the near and far clip depths, `fov` the horizontal
    /// and vertical half-angles in radians, `eye` the eye offset along z.
    /// The cross-section at each clip depth spans
    /// `±(eye − z) · tan(fov)` on each axis.
    pub fn from_fov(z_clip: [f64; 2], fov: [f64; 2], eye: f64) -> Self {
        let near = eye - z_clip[0];
        let x_near = near * fov[0].tan();
        let y_near = near * fov[1].tan();

        let far = eye - z_clip[1];
        let x_far = far * fov[0].tan();
        let y_far = far * fov[1].tan();

        Self {
            corners: [
                DVec3::new(-x_near, y_near, z_clip[0]),
                DVec3::new(x_near, y_near, z_clip[0]),
                DVec3::new(x_near, -y_near, z_clip[0]),
                DVec3::new(-x_near, -y_near, z_clip[0]),
                DVec3::new(-x_far, y_far, z_clip[1]),
                DVec3::new(x_far, y_far, z_clip[1]),
                DVec3::new(x_far, -y_far, z_clip[1]),
                DVec3::new(-x_far, -y_far, z_clip[1]),
            ],
        }
    }

    /// Derive the six face planes from the corner vertices.
    ///
    /// Each plane's normal is the Newell normal of that face's three
    /// FACE_CORNERS entries; the offset anchors the plane on the face's
    /// second corner so that `normal · x + offset = 0` holds on the face.
    pub fn planes(&self) -> [Plane; 6] {
        FACE_CORNERS.map(|face| {
            let verts = face.map(|i| self.corners[i]);
            let normal = polygon_normal(&verts);

            Plane {
                normal,
                offset: -normal.dot(verts[1]),
            }
        })
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
