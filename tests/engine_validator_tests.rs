#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation functions behind grid construction and
//! builder configuration:
//! - Rectangularity of nested rows
//! - Flat-buffer dimension consistency, including overflow
//! - Duplicate builder parameter detection
//!
//! ## Test Organization
//!
//! 1. **Row Validation** - Ragged detection, empty and zero-width inputs
//! 2. **Dimension Validation** - Length checks and overflow
//! 3. **Builder Validation** - Duplicate parameter reporting

use spiral::internals::engine::validator::Validator;
use spiral::internals::primitives::errors::SpiralError;

// ============================================================================
// Row Validation Tests
// ============================================================================

/// Test validation accepts rectangular rows.
#[test]
fn test_validate_rows_rectangular() {
    let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
    assert!(Validator::validate_rows(&rows).is_ok(), "Uniform rows should pass");
}

/// Test validation rejects ragged rows.
///
/// Verifies that the first deviating row is the one reported.
#[test]
fn test_validate_rows_ragged() {
    let rows = vec![vec![1, 2, 3], vec![4, 5], vec![6]];
    let res = Validator::validate_rows(&rows);

    assert!(
        matches!(
            res,
            Err(SpiralError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            })
        ),
        "First deviating row should be reported"
    );
}

/// Test validation rejects a longer row as well as a shorter one.
#[test]
fn test_validate_rows_ragged_longer() {
    let rows = vec![vec![1, 2], vec![3, 4, 5]];
    let res = Validator::validate_rows(&rows);

    assert!(
        matches!(
            res,
            Err(SpiralError::RaggedRow {
                row: 1,
                len: 3,
                expected: 2
            })
        ),
        "Overlong row should error"
    );
}

/// Test validation accepts empty and zero-width inputs.
///
/// An empty outer slice and uniformly empty rows are both legal grids.
#[test]
fn test_validate_rows_empty_inputs() {
    let none: Vec<Vec<i32>> = vec![];
    assert!(Validator::validate_rows(&none).is_ok(), "No rows should pass");

    let zero_width: Vec<Vec<i32>> = vec![vec![], vec![], vec![]];
    assert!(
        Validator::validate_rows(&zero_width).is_ok(),
        "Uniform zero-width rows should pass"
    );
}

// ============================================================================
// Dimension Validation Tests
// ============================================================================

/// Test flat-buffer validation accepts matching dimensions.
#[test]
fn test_validate_row_major_match() {
    assert!(Validator::validate_row_major(12, 3, 4).is_ok());
    assert!(Validator::validate_row_major(0, 0, 0).is_ok());
    assert!(Validator::validate_row_major(0, 5, 0).is_ok());
    assert!(Validator::validate_row_major(0, 0, 5).is_ok());
}

/// Test flat-buffer validation rejects mismatched dimensions.
#[test]
fn test_validate_row_major_mismatch() {
    let res = Validator::validate_row_major(11, 3, 4);

    assert!(
        matches!(
            res,
            Err(SpiralError::DimensionMismatch {
                len: 11,
                rows: 3,
                cols: 4
            })
        ),
        "Short buffer should error"
    );
}

/// Test flat-buffer validation rejects an overflowing product.
#[test]
fn test_validate_row_major_overflow() {
    let res = Validator::validate_row_major(0, usize::MAX, 2);

    assert!(
        matches!(res, Err(SpiralError::DimensionOverflow { .. })),
        "usize overflow should error"
    );
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test duplicate parameter reporting.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    let res = Validator::validate_no_duplicates(Some("with_coordinates"));
    assert!(
        matches!(
            res,
            Err(SpiralError::DuplicateParameter {
                parameter: "with_coordinates"
            })
        ),
        "Duplicate parameter should error"
    );
}
