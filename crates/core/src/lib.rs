//! Core types for the expression-graph IR builder
//!
//! This crate defines the fundamental types shared by the store and
//! recorder layers:
//! - [`ExpressionId`]: dense, creation-ordered node identity
//! - [`OpKind`]: opaque operation tag
//! - [`Payload`]: uninterpreted per-node payload
//! - [`Node`]: one recorded operation (kind + ordered argument ids)
//! - [`Error`]/[`Result`]: canonical error type for all operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod node;
pub mod types;

pub use error::{Error, Result};
pub use node::Node;
pub use types::{ExpressionId, OpKind, Payload};
