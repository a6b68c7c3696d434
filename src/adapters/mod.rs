//! Layer 3: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes and use cases:
//!
//! - **Batch**: Eager collection of the full output sequence
//! - **Streaming**: Lazy element-by-element production
//! - **Ringwise**: Ring-at-a-time production with a cancellation point
//!   between rings
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Adapters ← You are here
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Eager batch traversal.
pub mod batch;

/// Lazy streaming traversal.
pub mod streaming;

/// Ring-at-a-time traversal.
pub mod ringwise;
