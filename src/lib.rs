//! # spiral — Ring-peeling traversal over rectangular grids
//!
//! Consume a rectangular grid and produce the linear sequence of its
//! elements ordered by concentric, clockwise peeling of the outer boundary
//! inward ("spiral order").
//!
//! ## Quick Start
//!
//! ```rust
//! use spiral::prelude::*;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![1, 2, 3, 4],
//!     vec![5, 6, 7, 8],
//!     vec![9, 10, 11, 12],
//! ])?;
//!
//! // Build the traversal
//! let walker = Spiral::new().adapter(Batch).build()?;
//!
//! // Traverse the grid
//! let result = walker.traverse(&grid);
//!
//! assert_eq!(result.elements, [1, 2, 3, 4, 8, 12, 11, 10, 9, 5, 6, 7]);
//! assert_eq!(result.rings, 2);
//! # Result::<(), SpiralError>::Ok(())
//! ```
//!
//! ## Lazy Production
//!
//! The streaming adapter yields borrowed elements one at a time; the
//! ringwise adapter yields one peeled ring per step, which gives callers a
//! natural cancellation point between rings:
//!
//! ```rust
//! use spiral::prelude::*;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![1, 2, 3],
//!     vec![4, 5, 6],
//!     vec![7, 8, 9],
//! ])?;
//!
//! // Element-by-element, no intermediate collection
//! let streamer = Spiral::new().adapter(Streaming).build()?;
//! let first_four: Vec<i32> = streamer.traverse(&grid).take(4).copied().collect();
//! assert_eq!(first_four, [1, 2, 3, 6]);
//!
//! // Ring-at-a-time; stop whenever you like between rings
//! let ringwise = Spiral::new().adapter(Ringwise).build()?;
//! let mut rings = ringwise.traverse(&grid);
//! assert_eq!(rings.next().unwrap(), [&1, &2, &3, &6, &9, &8, &7, &4]);
//! assert_eq!(rings.next().unwrap(), [&5]);
//! assert!(rings.next().is_none());
//! # Result::<(), SpiralError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Validation happens at construction time: a ragged input is rejected
//! before any traversal can run, and a constructed grid traverses
//! infallibly. Empty grids (0×0, R×0, 0×C) are values, not errors, and
//! traverse to the empty sequence.
//!
//! ```rust
//! use spiral::prelude::*;
//!
//! let ragged = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5]]);
//! assert!(matches!(
//!     ragged,
//!     Err(SpiralError::RaggedRow { row: 1, len: 2, expected: 3 })
//! ));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency (`alloc` is still required):
//!
//! ```toml
//! [dependencies]
//! spiral = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - grid, frame, and error types.
mod primitives;

// Layer 2: Engine - validation, ring-peeling executor, output types.
mod engine;

// Layer 3: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for spiral traversal.
mod api;

// Standard spiral prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Ringwise, Streaming},
        Grid, RingIter, SpiralBuilder as Spiral, SpiralError, SpiralIter, SpiralResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
