//! Ringwise adapter for ring-at-a-time spiral traversal.
//!
//! ## Purpose
//!
//! This module provides the ringwise execution adapter: an iterator that
//! yields one complete peeled ring per step, outermost first. It exposes the
//! ring structure the other adapters flatten away.
//!
//! ## Design notes
//!
//! * **Granularity**: One `next()` call peels exactly one ring; the caller
//!   observes ring boundaries directly.
//! * **Cancellation Point**: A traversal is abandoned mid-grid by simply
//!   dropping the iterator between rings; no cooperation from the engine is
//!   required.
//! * **Buffer Reuse**: Ring coordinates are staged in one scratch buffer
//!   recycled across rings.
//!
//! ## Key concepts
//!
//! * **Ring**: The outermost rectangular boundary of unvisited cells.
//! * **Concatenation Law**: Concatenating all yielded rings reproduces the
//!   flat spiral order exactly.
//!
//! ## Invariants
//!
//! * Yielded rings are disjoint and jointly cover the grid.
//! * `size_hint` is exact: half the shorter remaining dimension, rounded up.
//!
//! ## Non-goals
//!
//! * This adapter does not yield individual elements (use the streaming
//!   adapter).
//! * This adapter does not record coordinates (batch-only option).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::iter::FusedIterator;

// Internal dependencies
use crate::engine::executor::peel_ring;
use crate::engine::validator::Validator;
use crate::primitives::errors::SpiralError;
use crate::primitives::frame::Frame;
use crate::primitives::grid::Grid;

// ============================================================================
// Ringwise Spiral Builder
// ============================================================================

/// Builder for the ringwise traversal processor.
#[derive(Debug, Clone, Default)]
pub struct RingwiseSpiralBuilder {
    /// Deferred error from adapter conversion.
    pub deferred_error: Option<SpiralError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl RingwiseSpiralBuilder {
    /// Build the ringwise processor.
    pub fn build(self) -> Result<RingwiseSpiral, SpiralError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(RingwiseSpiral {})
    }
}

// ============================================================================
// Ringwise Spiral Processor
// ============================================================================

/// Ringwise traversal processor.
#[derive(Debug, Clone)]
pub struct RingwiseSpiral {}

impl RingwiseSpiral {
    /// Traverse the grid one peeled ring at a time, outermost first.
    pub fn traverse<'g, T>(&self, grid: &'g Grid<T>) -> RingIter<'g, T> {
        RingIter::new(grid)
    }
}

// ============================================================================
// Ring Iterator
// ============================================================================

/// Iterator yielding one peeled ring of borrowed elements per step.
#[derive(Debug, Clone)]
pub struct RingIter<'g, T> {
    /// Source grid; elements are borrowed, never cloned.
    grid: &'g Grid<T>,

    /// Boundary frame of the not-yet-peeled region.
    frame: Frame,

    /// Scratch buffer for the current ring's coordinates.
    scratch: Vec<(usize, usize)>,
}

impl<'g, T> RingIter<'g, T> {
    fn new(grid: &'g Grid<T>) -> Self {
        let frame = Frame::new(grid.rows(), grid.cols());
        Self {
            grid,
            frame,
            scratch: Vec::with_capacity(frame.ring_len()),
        }
    }
}

impl<'g, T> Iterator for RingIter<'g, T> {
    type Item = Vec<&'g T>;

    fn next(&mut self) -> Option<Vec<&'g T>> {
        if self.frame.is_exhausted() {
            return None;
        }

        self.scratch.clear();
        peel_ring(&mut self.frame, &mut self.scratch);

        Some(
            self.scratch
                .iter()
                .map(|&(row, col)| self.grid.cell(row, col))
                .collect(),
        )
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame.rings_remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for RingIter<'_, T> {}

impl<T> FusedIterator for RingIter<'_, T> {}
