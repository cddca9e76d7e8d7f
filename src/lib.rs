//! # Ringlet
//!
//! A tiny arena-backed ring of nodes with a bounded, randomized recursive
//! traversal.
//!
//! ## Features
//!
//! - **Cycles without shared ownership**: nodes live in an arena and link to
//!   each other by handle, so a closed loop needs no reference counting
//! - **Bounded traversal**: every hop decrements a counter, so the chain
//!   terminates despite the cyclic wiring
//! - **Pluggable value sources**: the default draws from the thread-local
//!   generator; a seeded source makes whole traversals reproducible
//! - **Optional tracing**: hand a sink to the traversal and get one record per
//!   hop, serializable as JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use ringlet::prelude::*;
//!
//! let mut ring = Ring::new();
//! let n1 = ring.insert(NodeKind::Base);
//! let n2 = ring.insert(NodeKind::VariantB);
//! let n3 = ring.insert(NodeKind::VariantC);
//! ring.wire_cycle(&[n1, n2, n3]).unwrap();
//!
//! let mut source = ThreadRngSource;
//! let value = ring.act(n1, 8, &mut source).unwrap();
//!
//! assert!((0..=MAX_VALUE).contains(&value));
//! assert_eq!(ring.history(n1).unwrap().len(), 3);
//! ```
//!
//! ## Module Organization
//!
//! - [`Ring`]: the arena, wiring, and traversal
//! - [`Node`], [`NodeId`], [`NodeKind`]: the participants and their handles
//! - [`ValueSource`], [`ThreadRngSource`], [`SeededSource`]: where values come from
//! - [`TraceSink`], [`MemoryTrace`], [`HopRecord`]: per-hop observation
//! - [`prelude`]: commonly used types (import with `use ringlet::prelude::*`)

// ============================================================================
// Core Module
// ============================================================================

mod core;

// ============================================================================
// Public Re-exports - Granular Imports
// ============================================================================

pub use crate::core::error::RingError;
pub use crate::core::node::{Node, NodeId, NodeKind};
pub use crate::core::ring::Ring;
pub use crate::core::source::{MAX_VALUE, SeededSource, ThreadRngSource, ValueSource};
pub use crate::core::trace::{HopRecord, MemoryTrace, TraceSink};

// ============================================================================
// Prelude Module - Convenient Bulk Imports
// ============================================================================

/// The prelude: imports everything you need to build and traverse rings.
///
/// # Example
/// ```rust
/// use ringlet::prelude::*;
/// ```
pub mod prelude {
    pub use super::{
        HopRecord,
        MAX_VALUE,
        MemoryTrace,
        // Participants
        Node,
        NodeId,
        NodeKind,
        // Arena
        Ring,
        RingError,
        SeededSource,
        ThreadRngSource,
        // Values
        ValueSource,
        // Tracing
        TraceSink,
    };
}

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
