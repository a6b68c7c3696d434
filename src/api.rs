//! High-level API for spiral traversal.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for spiral
//! traversal. It implements a fluent builder pattern for configuring the
//! traversal and choosing an execution adapter (Batch, Streaming, or
//! Ringwise).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter
//!   builders.
//! * **Validated**: Options are validated when `.build()` is called on the
//!   adapter builder; options unsupported by an adapter surface there as
//!   deferred errors.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch, Streaming, and Ringwise modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SpiralBuilder`] via `Spiral::new()`.
//! 2. Chain configuration methods (`.with_coordinates()`).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder,
//!    then `.build()` and traverse.

// Internal dependencies
use crate::adapters::batch::BatchSpiralBuilder;
use crate::adapters::ringwise::RingwiseSpiralBuilder;
use crate::adapters::streaming::StreamingSpiralBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchSpiral;
pub use crate::adapters::ringwise::{RingIter, RingwiseSpiral};
pub use crate::adapters::streaming::{SpiralIter, StreamingSpiral};
pub use crate::engine::output::SpiralResult;
pub use crate::primitives::errors::SpiralError;
pub use crate::primitives::grid::Grid;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Ringwise, Streaming};
}

// ============================================================================
// Spiral Builder
// ============================================================================

/// Fluent builder for configuring a spiral traversal and its execution mode.
#[derive(Debug, Clone)]
pub struct SpiralBuilder {
    /// Whether to record `(row, col)` coordinates alongside elements
    /// (Batch only).
    pub coordinates: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for SpiralBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpiralBuilder {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SpiralAdapter,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            coordinates: None,
            duplicate_param: None,
        }
    }

    /// Record cell coordinates alongside elements (Batch only).
    pub fn with_coordinates(mut self) -> Self {
        if self.coordinates.is_some() {
            self.duplicate_param = Some("with_coordinates");
        }
        self.coordinates = Some(true);
        self
    }
}

// ============================================================================
// Adapter Markers
// ============================================================================

/// Trait for transitioning from the generic builder to an execution builder.
pub trait SpiralAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SpiralBuilder`] into a specialized execution
    /// builder.
    fn convert(builder: SpiralBuilder) -> Self::Output;
}

/// Marker for eager in-memory collection.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl SpiralAdapter for Batch {
    type Output = BatchSpiralBuilder;

    fn convert(builder: SpiralBuilder) -> Self::Output {
        let mut result = BatchSpiralBuilder::default();

        if let Some(coordinates) = builder.coordinates {
            result.coordinates = coordinates;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for lazy element-by-element production.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl SpiralAdapter for Streaming {
    type Output = StreamingSpiralBuilder;

    fn convert(builder: SpiralBuilder) -> Self::Output {
        let mut result = StreamingSpiralBuilder::default();

        if builder.coordinates == Some(true) {
            result.deferred_error = Some(SpiralError::UnsupportedFeature {
                adapter: "Streaming",
                feature: "coordinates",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for ring-at-a-time production.
#[derive(Debug, Clone, Copy)]
pub struct Ringwise;

impl SpiralAdapter for Ringwise {
    type Output = RingwiseSpiralBuilder;

    fn convert(builder: SpiralBuilder) -> Self::Output {
        let mut result = RingwiseSpiralBuilder::default();

        if builder.coordinates == Some(true) {
            result.deferred_error = Some(SpiralError::UnsupportedFeature {
                adapter: "Ringwise",
                feature: "coordinates",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
