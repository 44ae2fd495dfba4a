//! The process-wide recorder
//!
//! Tracing call sites (the operation-overloading layer) do not carry a
//! recorder around; they talk to one process-wide instance through the
//! free functions in this module. The instance lives behind a
//! `parking_lot::Mutex` because statics must be `Sync`; the lock
//! serializes individual calls, while the one-trace-at-a-time rule is
//! still enforced by the [`Recorder`] state machine itself.
//!
//! The lock is held only for the duration of each call. Callers that
//! interleave `start`/`stop`/`with_active` from multiple threads get
//! individually consistent calls but no cross-call atomicity; a trace
//! is a single-threaded affair.

use crate::recorder::Recorder;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracegraph_core::Result;
use tracegraph_store::ExpressionGraph;

static RECORDER: Lazy<Mutex<Recorder>> = Lazy::new(|| Mutex::new(Recorder::new()));

/// Begin a trace on the process-wide recorder.
///
/// After this call, tracing call sites can append nodes through
/// [`with_active`] until [`stop_recording`] is called.
///
/// Fails with [`Error::AlreadyRecording`] if a trace is already open.
///
/// [`Error::AlreadyRecording`]: tracegraph_core::Error::AlreadyRecording
pub fn start_recording() -> Result<()> {
    RECORDER.lock().start()
}

/// End the trace on the process-wide recorder, returning the finalized
/// graph.
///
/// The recorder retains no reference to the returned graph; it is an
/// ordinary value owned by the caller.
///
/// Fails with [`Error::NotRecording`] if no trace is open.
///
/// [`Error::NotRecording`]: tracegraph_core::Error::NotRecording
pub fn stop_recording() -> Result<ExpressionGraph> {
    RECORDER.lock().stop()
}

/// Check whether the process-wide recorder has a trace open.
pub fn is_recording() -> bool {
    RECORDER.lock().is_recording()
}

/// Run `f` against the active graph, if any.
///
/// Returns `None` without invoking `f` when no trace is open. This is
/// the append path for tracing call sites:
///
/// ```
/// use tracegraph_recorder::{reset_recording, start_recording, stop_recording, with_active};
/// use tracegraph_core::OpKind;
///
/// reset_recording();
/// start_recording()?;
/// let id = with_active(|graph| graph.create_node(OpKind::Parameter)).expect("recording");
/// let graph = stop_recording()?;
/// assert_eq!(graph.node(id)?.kind(), OpKind::Parameter);
/// # Ok::<(), tracegraph_core::Error>(())
/// ```
pub fn with_active<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut ExpressionGraph) -> R,
{
    let mut recorder = RECORDER.lock();
    recorder.current_mut().map(f)
}

/// Force the process-wide recorder back to Idle, discarding any active
/// graph.
///
/// Never fails; intended for test harnesses that need a known state
/// between cases without restarting the process.
pub fn reset_recording() {
    RECORDER.lock().reset()
}
