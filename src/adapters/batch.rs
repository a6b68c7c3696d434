//! Batch adapter for eager spiral traversal.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It runs the complete
//! ring-peel in one pass and collects the visited elements (and, on request,
//! their coordinates) into an owned [`SpiralResult`].
//!
//! ## Design notes
//!
//! * **Processing**: Produces the entire output sequence eagerly.
//! * **Delegation**: Delegates the visit order to the execution engine.
//! * **Infallible Traversal**: All fallibility lives in grid construction and
//!   builder validation; `traverse` is total over a constructed grid.
//! * **Reusable**: `traverse` borrows the processor, so one configuration can
//!   serve any number of grids.
//!
//! ## Key concepts
//!
//! * **Batch Processing**: Validates configuration, executes, and assembles
//!   the result in one call.
//! * **Builder Pattern**: Fluent configuration with sensible defaults.
//!
//! ## Invariants
//!
//! * The result holds exactly `rows * cols` elements, each grid cell once.
//! * Coordinates, when recorded, align index-for-index with the elements.
//!
//! ## Non-goals
//!
//! * This adapter does not produce elements lazily (use the streaming
//!   adapter).
//! * This adapter does not expose ring boundaries (use the ringwise adapter).

// Internal dependencies
use crate::engine::executor::SpiralExecutor;
use crate::engine::output::SpiralResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::SpiralError;
use crate::primitives::grid::Grid;

// ============================================================================
// Batch Spiral Builder
// ============================================================================

/// Builder for the batch traversal processor.
#[derive(Debug, Clone, Default)]
pub struct BatchSpiralBuilder {
    /// Whether to record `(row, col)` coordinates alongside elements.
    pub coordinates: bool,

    /// Deferred error from adapter conversion.
    pub deferred_error: Option<SpiralError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl BatchSpiralBuilder {
    // ========================================================================
    // Setters
    // ========================================================================

    /// Enable recording cell coordinates in the result.
    pub fn coordinates(mut self, enabled: bool) -> Self {
        self.coordinates = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchSpiral, SpiralError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchSpiral { config: self })
    }
}

// ============================================================================
// Batch Spiral Processor
// ============================================================================

/// Batch traversal processor.
#[derive(Debug, Clone)]
pub struct BatchSpiral {
    config: BatchSpiralBuilder,
}

impl BatchSpiral {
    /// Traverse the grid in clockwise ring-peel order.
    ///
    /// Returns the visited elements (cloned out of the grid) together with
    /// traversal metadata. The grid itself is never mutated, so repeated
    /// calls on the same grid yield identical results.
    pub fn traverse<T: Clone>(&self, grid: &Grid<T>) -> SpiralResult<T> {
        let order = SpiralExecutor::run(grid.rows(), grid.cols());

        let elements = order
            .coordinates
            .iter()
            .map(|&(row, col)| grid.cell(row, col).clone())
            .collect();

        let coordinates = if self.config.coordinates {
            Some(order.coordinates)
        } else {
            None
        };

        SpiralResult {
            elements,
            coordinates,
            rows: grid.rows(),
            cols: grid.cols(),
            rings: order.rings,
        }
    }
}
