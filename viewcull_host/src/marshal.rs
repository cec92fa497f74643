/// Flat-array conversions between the host layout and glam types.
///
/// The host side is row-major; glam is column-major, so 4×4 matrices are
/// transposed on the way in and out. Vertex batches are reinterpreted in
/// place via bytemuck (`DVec3` is a plain `[f64; 3]` in memory).

use bytemuck::cast_slice;
use glam::{DMat4, DVec3};
use viewcull::{Error, Plane, Result};

/// Require an exact element count.
pub(crate) fn expect_len(what: &'static str, slice: &[f64], expected: usize) -> Result<()> {
    if slice.len() != expected {
        return Err(Error::ShapeMismatch {
            what,
            expected,
            actual: slice.len(),
        });
    }
    Ok(())
}

/// Row-major 16-element slice → `DMat4`.
pub(crate) fn mat4_from_rows(what: &'static str, slice: &[f64]) -> Result<DMat4> {
    expect_len(what, slice, 16)?;
    let mut arr = [0.0; 16];
    arr.copy_from_slice(slice);
    Ok(DMat4::from_cols_array(&arr).transpose())
}

/// `DMat4` → row-major 16-element array.
pub(crate) fn mat4_to_rows(m: &DMat4) -> [f64; 16] {
    m.transpose().to_cols_array()
}

/// 2-element slice → `[f64; 2]` pair.
pub(crate) fn pair(what: &'static str, slice: &[f64]) -> Result<[f64; 2]> {
    expect_len(what, slice, 2)?;
    Ok([slice[0], slice[1]])
}

/// 3-element slice → `DVec3`.
pub(crate) fn vec3(what: &'static str, slice: &[f64]) -> Result<DVec3> {
    expect_len(what, slice, 3)?;
    Ok(DVec3::new(slice[0], slice[1], slice[2]))
}

/// Flat `[x, y, z, …]` batch → `&[DVec3]` without copying.
pub(crate) fn vec3_batch<'a>(what: &'static str, slice: &'a [f64]) -> Result<&'a [DVec3]> {
    if slice.len() % 3 != 0 {
        return Err(Error::UnsupportedDimension {
            what,
            len: slice.len(),
        });
    }
    Ok(cast_slice(slice))
}

/// Flat 6×4 array (normal x, y, z, offset per row) → `[Plane; 6]`.
pub(crate) fn planes_from_flat(what: &'static str, slice: &[f64]) -> Result<[Plane; 6]> {
    expect_len(what, slice, 24)?;

    let mut planes = [Plane { normal: DVec3::ZERO, offset: 0.0 }; 6];
    for (plane, row) in planes.iter_mut().zip(slice.chunks_exact(4)) {
        *plane = Plane {
            normal: DVec3::new(row[0], row[1], row[2]),
            offset: row[3],
        };
    }
    Ok(planes)
}

#[cfg(test)]
#[path = "marshal_tests.rs"]
mod tests;
