//! Unified error types for tracegraph.
//!
//! Two families of failure exist in the system:
//!
//! - Range errors ([`Error::OutOfRange`], [`Error::ForwardReference`]):
//!   an id-indexed accessor was handed an id outside the valid range.
//!   Indicates a corrupted or cross-graph id; not retryable.
//! - Protocol errors ([`Error::AlreadyRecording`], [`Error::NotRecording`]):
//!   the start/stop recording protocol was misused. Signals a caller
//!   bug; the tracing attempt should be aborted, not retried.
//!
//! No operation leaves partial state behind on error.

use thiserror::Error;

/// All tracegraph errors.
///
/// This is the canonical error type for store and recorder operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An expression id outside `[0, len)` was passed to an accessor.
    #[error("expression id {id} out of range (graph has {len} nodes)")]
    OutOfRange {
        /// The offending id, as a raw index
        id: usize,
        /// Node count of the graph at the time of the call
        len: usize,
    },

    /// An argument insertion would create a self or forward edge.
    ///
    /// Arguments must refer to nodes created strictly earlier, so the
    /// only ids a node may reference are `[0, id)`.
    #[error("argument {arg} is not an earlier node than {id}")]
    ForwardReference {
        /// The node the argument was being added to
        id: usize,
        /// The rejected argument id
        arg: usize,
    },

    /// `start()` was called while a recording is already in progress.
    #[error("a recording is already in progress")]
    AlreadyRecording,

    /// `stop()` was called with no recording in progress.
    #[error("no recording in progress, nothing to finalize")]
    NotRecording,
}

/// Result type for tracegraph operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a range error (bad id handed to an accessor).
    ///
    /// Covers both range variants: [`Error::OutOfRange`] and its
    /// refinement [`Error::ForwardReference`], where the id missed the
    /// narrower range `[0, id)` a node may reference.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. } | Error::ForwardReference { .. })
    }

    /// Check if this is a recording-protocol violation.
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Error::AlreadyRecording | Error::NotRecording)
    }
}
