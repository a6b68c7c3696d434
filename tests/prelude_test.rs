//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types and traits
//! for convenient usage of the spiral API. The prelude should provide a
//! one-stop import for common traversal functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use spiral::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for spiral usage.
#[test]
fn test_prelude_imports() {
    let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();

    // Verify Spiral (SpiralBuilder), Adapter markers, and result are useable
    let result = Spiral::new().adapter(Batch).build().unwrap().traverse(&grid);

    assert_eq!(result.len(), 4, "Basic traversal should work with prelude imports");
}

/// Test adapter types are available.
///
/// Verifies that all adapter markers are exported.
#[test]
fn test_prelude_adapters() {
    let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();

    // Batch adapter
    let _ = Spiral::new().adapter(Batch).build().unwrap().traverse(&grid);

    // Streaming adapter
    let _ = Spiral::new().adapter(Streaming).build();

    // Ringwise adapter
    let _ = Spiral::new().adapter(Ringwise).build();
}

/// Test iterator types are available.
///
/// Verifies that SpiralIter and RingIter are nameable through the prelude.
#[test]
fn test_prelude_iterator_types() {
    let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();

    let iter: SpiralIter<'_, i32> = Spiral::new()
        .adapter(Streaming)
        .build()
        .unwrap()
        .traverse(&grid);
    assert_eq!(iter.len(), 4);

    let rings: RingIter<'_, i32> = Spiral::new()
        .adapter(Ringwise)
        .build()
        .unwrap()
        .traverse(&grid);
    assert_eq!(rings.len(), 1);
}

/// Test complete workflow with prelude.
///
/// Verifies that a complete traversal workflow works with only prelude
/// imports.
#[test]
fn test_prelude_complete_workflow() {
    let grid = Grid::from_rows(vec![
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
    ])
    .unwrap();

    let result: SpiralResult<i32> = Spiral::new()
        .with_coordinates()
        .adapter(Batch)
        .build()
        .unwrap()
        .traverse(&grid);

    // Verify all requested outputs are present
    assert_eq!(result.elements, [1, 2, 3, 4, 8, 12, 11, 10, 9, 5, 6, 7]);
    assert!(result.has_coordinates());
    assert_eq!(result.rings, 2);
}

/// Test error types are available.
///
/// Verifies that error handling works with prelude imports.
#[test]
fn test_prelude_error_handling() {
    let ragged = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5]]);

    // Should be able to match on error types from prelude
    assert!(matches!(
        ragged,
        Err(SpiralError::RaggedRow {
            row: 1,
            len: 2,
            expected: 3
        })
    ));
}
