//! Graph store for tracegraph
//!
//! This crate implements the append-only expression store:
//! - [`ExpressionGraph`]: dense node arena addressed by `ExpressionId`
//! - Reachability queries (`depends_on`) over argument edges
//!
//! The store knows nothing about recording state; the recorder crate
//! owns the one-active-trace protocol.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

pub use graph::ExpressionGraph;
