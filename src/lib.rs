//! # tracegraph
//!
//! Trace-based expression-graph IR builder.
//!
//! tracegraph records the symbolic operations performed during a
//! program's execution into a directed acyclic graph of expression
//! nodes, so the traced computation can later be analyzed, transformed,
//! and re-emitted (automatic differentiation, code generation)
//! independently of the original execution context.
//!
//! ## Quick Start
//!
//! ```
//! use tracegraph::prelude::*;
//!
//! // Begin a trace on the process-wide recorder.
//! reset_recording();
//! start_recording()?;
//!
//! // Tracing call sites append nodes to the active graph.
//! let (x, y, sum) = with_active(|graph| {
//!     let x = graph.create_node(OpKind::Parameter);
//!     let y = graph.create_node(OpKind::Parameter);
//!     let sum = graph.create_node(OpKind::Plus);
//!     graph.add_argument(sum, x)?;
//!     graph.add_argument(sum, y)?;
//!     Ok::<_, Error>((x, y, sum))
//! }).expect("recording")?;
//!
//! // End the trace; the finalized graph is an ordinary value.
//! let graph = stop_recording()?;
//! assert_eq!(graph.len(), 3);
//! assert!(graph.depends_on(sum, x)?);
//! assert!(!graph.depends_on(x, y)?);
//! # Ok::<(), tracegraph::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`ExpressionGraph`] - append-only node store addressed by
//!   [`ExpressionId`], with reachability queries
//! - [`Recorder`] - injectable Idle/Recording state machine; the
//!   process-wide instance is reachable through [`start_recording`],
//!   [`stop_recording`], [`with_active`]
//!
//! What an operation *means* is out of scope: a node is an opaque
//! [`OpKind`] plus ordered argument ids plus an uninterpreted
//! [`Payload`], and interpretation belongs to downstream consumers.

#![warn(missing_docs)]

pub mod prelude;

// Core types
pub use tracegraph_core::{Error, ExpressionId, Node, OpKind, Payload, Result};

// Graph store
pub use tracegraph_store::ExpressionGraph;

// Recording controller
pub use tracegraph_recorder::{
    is_recording, reset_recording, start_recording, stop_recording, with_active, Recorder,
};
