//! Convenient imports for tracegraph.
//!
//! This module re-exports the most commonly used items so you can get
//! started with a single import:
//!
//! ```
//! use tracegraph::prelude::*;
//!
//! let mut recorder = Recorder::new();
//! recorder.start()?;
//! # Ok::<(), Error>(())
//! ```

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::{ExpressionId, Node, OpKind, Payload};

// Graph store
pub use crate::ExpressionGraph;

// Recording controller
pub use crate::{
    is_recording, reset_recording, start_recording, stop_recording, with_active, Recorder,
};
