//! Recording controller for tracegraph
//!
//! This crate implements the single-active-trace protocol:
//! - [`Recorder`]: an injectable Idle/Recording state machine owning
//!   at most one in-progress [`ExpressionGraph`]
//! - [`global`]: the process-wide recorder the operation-overloading
//!   layer talks to, plus free functions mirroring the `Recorder` API
//!
//! The store itself has no notion of recording state; everything about
//! when nodes may legally be created lives here.
//!
//! [`ExpressionGraph`]: tracegraph_store::ExpressionGraph

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod global;
pub mod recorder;

pub use global::{is_recording, reset_recording, start_recording, stop_recording, with_active};
pub use recorder::Recorder;
