//! Unit tests for error.rs

use super::*;

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_shape_mismatch_display() {
    let err = Error::ShapeMismatch {
        what: "transform",
        expected: 16,
        actual: 9,
    };
    assert_eq!(
        err.to_string(),
        "Shape mismatch: transform requires 16 elements, got 9"
    );
}

#[test]
fn test_unsupported_dimension_display() {
    let err = Error::UnsupportedDimension {
        what: "vertices",
        len: 10,
    };
    assert_eq!(
        err.to_string(),
        "Unsupported dimension: vertices has 10 elements, not a multiple of 3"
    );
}

// ============================================================================
// Trait impls
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Error::ShapeMismatch {
        what: "extents",
        expected: 6,
        actual: 3,
    });
    assert!(err.to_string().contains("extents"));
}

#[test]
fn test_error_clone_eq() {
    let err = Error::UnsupportedDimension { what: "centers", len: 7 };
    assert_eq!(err.clone(), err);
    assert_ne!(
        err,
        Error::UnsupportedDimension { what: "centers", len: 8 }
    );
}
