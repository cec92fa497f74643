use std::f64::consts::FRAC_PI_4;
use viewcull::{CullOptions, Error};
use super::*;

const IDENTITY_ROWS: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

const IDENT_CONV: [f64; 2] = [0.0, 1.0];

/// Six planes of the cube [-1, 1]^3, flat 6×4, interior-positive normals.
const CUBE_PLANES: [f64; 24] = [
    1.0, 0.0, 0.0, 1.0,
    -1.0, 0.0, 0.0, 1.0,
    0.0, 1.0, 0.0, 1.0,
    0.0, -1.0, 0.0, 1.0,
    0.0, 0.0, 1.0, 1.0,
    0.0, 0.0, -1.0, 1.0,
];

fn assert_near(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-12, "element {}: {} != {}", i, a, e);
    }
}

// ============================================================================
// calc_bounding_box
// ============================================================================

#[test]
fn test_calc_bounding_box_identity() {
    let out = calc_bounding_box(
        &[0.0, 1.0],
        &[0.0, 2.0],
        &[0.0, 3.0],
        &IDENT_CONV,
        &IDENT_CONV,
        &IDENT_CONV,
        &IDENTITY_ROWS,
    )
    .unwrap();

    // min row, max row, (1,1,1) sentinel row
    assert_near(&out, &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_calc_bounding_box_applies_conversion() {
    let out = calc_bounding_box(
        &[0.0, 1.0],
        &[0.0, 1.0],
        &[0.0, 1.0],
        &[10.0, 2.0], // x -> 10 + 2x
        &IDENT_CONV,
        &IDENT_CONV,
        &IDENTITY_ROWS,
    )
    .unwrap();

    assert_near(&out[0..3], &[10.0, 0.0, 0.0]);
    assert_near(&out[3..6], &[12.0, 1.0, 1.0]);
}

#[test]
fn test_calc_bounding_box_shape_error() {
    let err = calc_bounding_box(
        &[0.0, 1.0, 2.0],
        &[0.0, 1.0],
        &[0.0, 1.0],
        &IDENT_CONV,
        &IDENT_CONV,
        &IDENT_CONV,
        &IDENTITY_ROWS,
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::ShapeMismatch { what: "x_range", expected: 2, actual: 3 }
    );
}

// ============================================================================
// camera_transform
// ============================================================================

#[test]
fn test_camera_transform_identity_rotation() {
    let out = camera_transform(&IDENTITY_ROWS, &[1.0, 2.0, 3.0], 5.0).unwrap();

    // Translation by -eye then by (0, 0, view_z): net (-1, -2, 2)
    let expected = [
        1.0, 0.0, 0.0, -1.0,
        0.0, 1.0, 0.0, -2.0,
        0.0, 0.0, 1.0, 2.0,
        0.0, 0.0, 0.0, 1.0,
    ];
    assert_near(&out, &expected);
}

#[test]
fn test_camera_transform_bad_location() {
    let err = camera_transform(&IDENTITY_ROWS, &[1.0, 2.0], 0.0).unwrap_err();
    assert_eq!(
        err,
        Error::ShapeMismatch { what: "location", expected: 3, actual: 2 }
    );
}

// ============================================================================
// transform_vertices
// ============================================================================

#[test]
fn test_transform_vertices_identity_round_trip() {
    let verts = [1.0, 2.0, 3.0, -4.0, 5.0, -6.0];
    let out = transform_vertices(&verts, &IDENTITY_ROWS).unwrap();
    assert_near(&out, &verts);
}

#[test]
fn test_transform_vertices_ragged_batch() {
    let err = transform_vertices(&[1.0, 2.0, 3.0, 4.0], &IDENTITY_ROWS).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedDimension { what: "vertices", len: 4 }
    );
}

// ============================================================================
// compute_frustum
// ============================================================================

#[test]
fn test_compute_frustum_vertices_only() {
    let out = compute_frustum(&[-1.0, -10.0], &[FRAC_PI_4, FRAC_PI_4], 0.0, false).unwrap();

    assert!(out.planes.is_none());
    // First near corner: (-x_near, +y_near, z_near) = (-1, 1, -1)
    assert_near(&out.vertices[0..3], &[-1.0, 1.0, -1.0]);
    // First far corner: (-10, 10, -10)
    assert_near(&out.vertices[12..15], &[-10.0, 10.0, -10.0]);
}

#[test]
fn test_compute_frustum_with_planes() {
    let out = compute_frustum(&[-1.0, -10.0], &[FRAC_PI_4, FRAC_PI_4], 0.0, true).unwrap();
    let planes = out.planes.unwrap();

    // Every interior point must be on the positive side of all six rows
    let interior = [0.0, 0.0, -5.0];
    for row in planes.chunks_exact(4) {
        let d = row[0] * interior[0] + row[1] * interior[1] + row[2] * interior[2] + row[3];
        assert!(d > 0.0, "interior point not positive on plane row {:?}", row);
    }
}

#[test]
fn test_compute_frustum_bad_fov_shape() {
    let err = compute_frustum(&[-1.0, -10.0], &[FRAC_PI_4], 0.0, false).unwrap_err();
    assert_eq!(err, Error::ShapeMismatch { what: "fov", expected: 2, actual: 1 });
}

// ============================================================================
// aabb_intersect_frustum
// ============================================================================

#[test]
fn test_aabb_intersect_basic() {
    let centers = [0.0, 0.0, 0.0, 5.0, 0.0, 0.0];
    let extents = [0.5, 0.5, 0.5, 0.5, 0.5, 0.5];

    let out =
        aabb_intersect_frustum(&centers, &extents, &CUBE_PLANES, CullOptions::default()).unwrap();

    assert_eq!(out.in_view, vec![1, 0]);
    assert!(out.clip_masks.is_none());
}

#[test]
fn test_aabb_intersect_clip_masks() {
    // Second box sits on the x = 1 face: straddles plane 1 -> bit 1
    let centers = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    let extents = [0.5, 0.5, 0.5, 0.5, 0.5, 0.5];
    let options = CullOptions { clip_masks: true, full_masks: false };

    let out = aabb_intersect_frustum(&centers, &extents, &CUBE_PLANES, options).unwrap();

    assert_eq!(out.in_view, vec![1, 1]);
    assert_eq!(out.clip_masks, Some(vec![0, 1 << 1]));
}

#[test]
fn test_aabb_intersect_full_masks() {
    // Rejected by plane 3 (y = 1) but also straddling planes 1 and 5;
    // full_masks records the straddles past the rejection
    let centers = [1.0, 5.0, 1.0];
    let extents = [0.5, 0.5, 0.5];
    let options = CullOptions { clip_masks: true, full_masks: true };

    let out = aabb_intersect_frustum(&centers, &extents, &CUBE_PLANES, options).unwrap();

    assert_eq!(out.in_view, vec![0]);
    assert_eq!(out.clip_masks, Some(vec![(1 << 1) | (1 << 5)]));
}

#[test]
fn test_aabb_intersect_length_mismatch() {
    let err = aabb_intersect_frustum(
        &[0.0; 6],
        &[0.0; 3],
        &CUBE_PLANES,
        CullOptions::default(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::ShapeMismatch { what: "extents", expected: 6, actual: 3 }
    );
    assert_eq!(sentinel_code(&err), SHAPE_MISMATCH_SENTINEL);
}

#[test]
fn test_sentinel_is_minus_three() {
    assert_eq!(SHAPE_MISMATCH_SENTINEL, -3);
}
