//! Streaming adapter for lazy spiral traversal.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter: a lazy iterator
//! that yields grid elements one at a time in clockwise ring-peel order,
//! without materializing the whole output sequence.
//!
//! ## Design notes
//!
//! * **Strategy**: Peels one ring at a time into a small internal buffer and
//!   drains it; the buffer is recycled across rings, so memory stays bounded
//!   by the longest ring, not the grid.
//! * **Exact Sizing**: The iterator knows exactly how many elements remain
//!   and reports it through `size_hint`.
//! * **Restartable**: The sequence is finite and restarts only by calling
//!   `traverse` again on the same grid.
//!
//! ## Key concepts
//!
//! * **Lazy Production**: Elements are borrowed from the grid; nothing is
//!   cloned or buffered beyond the current ring's coordinates.
//! * **Fused**: Once exhausted, the iterator yields `None` forever.
//!
//! ## Invariants
//!
//! * The element order is identical to the batch adapter's output.
//! * `size_hint` is exact at every step.
//!
//! ## Non-goals
//!
//! * This adapter does not record coordinates (batch-only option).
//! * This adapter does not expose ring boundaries (use the ringwise adapter).

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
// Streaming Spiral Builder
// ============================================================================

/// Builder for the streaming traversal processor.
#[derive(Debug, Clone, Default)]
pub struct StreamingSpiralBuilder {
    /// Deferred error from adapter conversion.
    pub deferred_error: Option<SpiralError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl StreamingSpiralBuilder {
    /// Build the streaming processor.
    pub fn build(self) -> Result<StreamingSpiral, SpiralError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(StreamingSpiral {})
    }
}

// ============================================================================
// Streaming Spiral Processor
// ============================================================================

/// Streaming traversal processor.
#[derive(Debug, Clone)]
pub struct StreamingSpiral {}

impl StreamingSpiral {
    /// Lazily traverse the grid in clockwise ring-peel order.
    pub fn traverse<'g, T>(&self, grid: &'g Grid<T>) -> SpiralIter<'g, T> {
        SpiralIter::new(grid)
    }
}

// ============================================================================
// Spiral Iterator
// ============================================================================

/// Lazy element-by-element spiral iterator over a grid.
#[derive(Debug, Clone)]
pub struct SpiralIter<'g, T> {
    /// Source grid; elements are borrowed, never cloned.
    grid: &'g Grid<T>,

    /// Boundary frame of the not-yet-peeled region.
    frame: Frame,

    /// Coordinates of the ring currently being drained.
    ring: Vec<(usize, usize)>,

    /// Drain cursor within `ring`.
    pos: usize,

    /// Elements not yet yielded.
    remaining: usize,
}

impl<'g, T> SpiralIter<'g, T> {
    fn new(grid: &'g Grid<T>) -> Self {
        let frame = Frame::new(grid.rows(), grid.cols());
        Self {
            grid,
            frame,
            ring: Vec::with_capacity(frame.ring_len()),
            pos: 0,
            remaining: grid.len(),
        }
    }
}

impl<'g, T> Iterator for SpiralIter<'g, T> {
    type Item = &'g T;

    fn next(&mut self) -> Option<&'g T> {
        if self.pos == self.ring.len() {
            // Current ring drained; peel the next one into the same buffer.
            self.ring.clear();
            self.pos = 0;
            peel_ring(&mut self.frame, &mut self.ring);

            if self.ring.is_empty() {
                return None;
            }
        }

        let (row, col) = self.ring[self.pos];
        self.pos += 1;
        self.remaining -= 1;
        Some(self.grid.cell(row, col))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SpiralIter<'_, T> {}

impl<T> FusedIterator for SpiralIter<'_, T> {}
