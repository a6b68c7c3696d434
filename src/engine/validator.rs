//! Input validation for grid construction and builder configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions behind grid construction
//! and traversal configuration. It checks requirements such as uniform row
//! lengths, dimension consistency, and builder hygiene.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Construction-Time**: Grid checks run once, when the grid is built;
//!   traversal itself never validates (it is total over a constructed grid).
//!
//! ## Key concepts
//!
//! * **Rectangularity**: Every row must match the first row's length.
//! * **Dimension Consistency**: A flat buffer must hold exactly `rows * cols`
//!   elements, with the product computed overflow-checked.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective structural constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not repair or normalize malformed input.
//! * This module does not perform the traversal itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SpiralError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for grid construction and builder configuration.
///
/// Provides static methods that return `Result<(), SpiralError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Construction Validation
    // ========================================================================

    /// Validate that nested rows form a rectangle.
    ///
    /// The expected column count is the first row's length; the first row
    /// that deviates is reported. An empty outer slice is valid (0×0 grid).
    pub fn validate_rows<T>(rows: &[Vec<T>]) -> Result<(), SpiralError> {
        let expected = match rows.first() {
            Some(first) => first.len(),
            None => return Ok(()),
        };

        for (row, contents) in rows.iter().enumerate().skip(1) {
            if contents.len() != expected {
                return Err(SpiralError::RaggedRow {
                    row,
                    len: contents.len(),
                    expected,
                });
            }
        }

        Ok(())
    }

    /// Validate a flat row-major buffer against declared dimensions.
    pub fn validate_row_major(len: usize, rows: usize, cols: usize) -> Result<(), SpiralError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(SpiralError::DimensionOverflow { rows, cols })?;

        if len != expected {
            return Err(SpiralError::DimensionMismatch { len, rows, cols });
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SpiralError> {
        if let Some(parameter) = duplicate_param {
            return Err(SpiralError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
