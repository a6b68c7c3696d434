//! Immutable rectangular grid container.
//!
//! ## Purpose
//!
//! This module defines the `Grid` type: a rectangular, two-dimensional
//! arrangement of elements stored in row-major order with dimensions fixed at
//! construction. It is the sole input of the traversal engine.
//!
//! ## Design notes
//!
//! * **Row-Major**: Elements live in a single contiguous `Vec<T>`, row after row.
//! * **Dynamically Sized**: Dimensions are runtime values, not const generics,
//!   so one compiled traversal works for any grid shape.
//! * **Validated**: Both constructors reject malformed input up front; a
//!   constructed grid is rectangular by definition.
//! * **Immutable**: No mutating accessors are exposed; the grid never changes
//!   after construction.
//!
//! ## Key concepts
//!
//! * **Construction**: `from_rows` (nested rows) and `from_row_major` (flat
//!   buffer plus declared dimensions).
//! * **Empty Grids**: 0×0, R×0, and 0×C grids are legal values that traverse
//!   to the empty sequence.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` at all times.
//! * Every row has exactly `cols` elements.
//!
//! ## Non-goals
//!
//! * This module does not provide a general array API (slicing, mapping,
//!   mutation, arithmetic).
//! * This module does not perform the traversal itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Index;
use core::slice;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SpiralError;

// ============================================================================
// Grid
// ============================================================================

/// An immutable rectangular grid of elements in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Elements in row-major order; `data.len() == rows * cols`.
    data: Vec<T>,

    /// Number of rows (R >= 0).
    rows: usize,

    /// Number of columns (C >= 0).
    cols: usize,
}

impl<T> Grid<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a grid from nested rows.
    ///
    /// The column count is taken from the first row; every subsequent row
    /// must match it. An empty outer vector yields the 0×0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`SpiralError::RaggedRow`] if any row's length differs from
    /// the first row's length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, SpiralError> {
        Validator::validate_rows(&rows)?;

        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(row_count * cols);
        for row in rows {
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: row_count,
            cols,
        })
    }

    /// Build a grid from a flat row-major buffer and declared dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SpiralError::DimensionOverflow`] if `rows * cols` exceeds
    /// `usize`, or [`SpiralError::DimensionMismatch`] if the buffer length
    /// does not equal `rows * cols`.
    pub fn from_row_major(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, SpiralError> {
        Validator::validate_row_major(data.len(), rows, cols)?;

        Ok(Self { data, rows, cols })
    }

    // ========================================================================
    // Dimension Queries
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Element at `(row, col)`, or `None` if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row `r` as a slice, or `None` if `r` is out of range.
    #[inline]
    pub fn row(&self, r: usize) -> Option<&[T]> {
        if r < self.rows {
            let start = r * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter_row_major(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Element at `(row, col)` without an `Option` wrapper.
    ///
    /// Callers must hold indices produced against this grid's dimensions;
    /// the traversal engine only emits in-range coordinates.
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// Index by `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range; use [`Grid::get`] for a
    /// non-panicking lookup.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
