//! Error types for grid construction and traversal configuration.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! grid or configuring a traversal, including ragged input detection,
//! dimension checks, and adapter limitations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected row lengths).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: All variants are `core`-only; no allocation is required.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Construction validation**: Ragged rows, dimension mismatches, overflow.
//! 2. **Adapter constraints**: Options not supported by the selected execution adapter.
//! 3. **Builder hygiene**: Parameters configured more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * An empty grid is a value, not an error; no variant represents it.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};

#[cfg(feature = "std")]
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for grid construction and traversal configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpiralError {
    /// A row's length differs from the declared column count.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of elements in the offending row.
        len: usize,
        /// Expected number of elements (the column count).
        expected: usize,
    },

    /// A row-major buffer's length disagrees with the declared dimensions.
    DimensionMismatch {
        /// Number of elements in the buffer.
        len: usize,
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },

    /// The element count `rows * cols` does not fit in `usize`.
    DimensionOverflow {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },

    /// Selected adapter does not support the requested option (e.g., coordinates).
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Streaming", "Ringwise").
        adapter: &'static str,
        /// Name of the unsupported option.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SpiralError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::RaggedRow { row, len, expected } => {
                write!(
                    f,
                    "Ragged grid: row {row} has {len} elements, expected {expected}"
                )
            }
            Self::DimensionMismatch { len, rows, cols } => {
                write!(
                    f,
                    "Dimension mismatch: {len} elements for a {rows}x{cols} grid"
                )
            }
            Self::DimensionOverflow { rows, cols } => {
                write!(f, "Dimension overflow: {rows}x{cols} exceeds usize")
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support option: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SpiralError {}
