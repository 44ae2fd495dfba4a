//! The Idle/Recording state machine
//!
//! ## Protocol
//!
//! ```text
//! 1. start() - Idle -> Recording, allocates an empty graph
//! 2. current_mut() - append nodes while recording
//! 3. stop() - Recording -> Idle, moves the finalized graph out
//! ```
//!
//! Recordings do not nest: `start()` while recording and `stop()`
//! while idle are protocol violations, reported as errors and never
//! retried. The recorder is reusable for any number of start/stop
//! cycles, strictly one at a time.
//!
//! Ownership discipline: while recording, the active graph is owned by
//! the recorder and only reachable through `current`/`current_mut`;
//! `stop()` moves it out by value, so the recorder retains no alias
//! and a finalized graph can never be extended through a stale handle.

use tracegraph_core::{Error, Result};
use tracegraph_store::ExpressionGraph;

/// State machine owning at most one in-progress expression graph
///
/// `Recorder` is plain data with no interior mutability or locking.
/// Callers that share one across threads must serialize access
/// themselves; [`crate::global`] does exactly that for the process-
/// wide instance.
///
/// # Example
///
/// ```
/// use tracegraph_recorder::Recorder;
/// use tracegraph_core::OpKind;
///
/// let mut recorder = Recorder::new();
/// recorder.start()?;
///
/// let graph = recorder.current_mut().expect("recording");
/// let x = graph.create_node(OpKind::Parameter);
/// let neg = graph.create_node(OpKind::UnaryMinus);
/// graph.add_argument(neg, x)?;
///
/// let finalized = recorder.stop()?;
/// assert_eq!(finalized.len(), 2);
/// assert!(recorder.current().is_none());
/// # Ok::<(), tracegraph_core::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    /// `Some` iff recording. The option is the whole state machine:
    /// Idle == None, Recording == Some.
    active: Option<ExpressionGraph>,
}

impl Recorder {
    /// Create a recorder in the Idle state.
    pub fn new() -> Self {
        Recorder { active: None }
    }

    /// Begin a trace: Idle -> Recording, with a fresh empty graph.
    ///
    /// Fails with [`Error::AlreadyRecording`] if a trace is open;
    /// the in-progress graph is left untouched in that case.
    pub fn start(&mut self) -> Result<()> {
        if self.active.is_some() {
            return Err(Error::AlreadyRecording);
        }
        tracing::debug!("start recording");
        self.active = Some(ExpressionGraph::new());
        Ok(())
    }

    /// End the trace: Recording -> Idle, transferring ownership of the
    /// finalized graph to the caller.
    ///
    /// Fails with [`Error::NotRecording`] if no trace is open.
    pub fn stop(&mut self) -> Result<ExpressionGraph> {
        let graph = self.active.take().ok_or(Error::NotRecording)?;
        tracing::debug!(nodes = graph.len(), "stop recording");
        Ok(graph)
    }

    /// The active graph, if recording.
    ///
    /// Performs no state transition; returns `None` while idle.
    pub fn current(&self) -> Option<&ExpressionGraph> {
        self.active.as_ref()
    }

    /// The active graph, mutably, if recording.
    ///
    /// This is the accessor tracing call sites use to append nodes
    /// mid-recording.
    pub fn current_mut(&mut self) -> Option<&mut ExpressionGraph> {
        self.active.as_mut()
    }

    /// Check whether a trace is open.
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// Force the recorder back to Idle, discarding any active graph.
    ///
    /// Unlike [`Recorder::stop`] this never fails; it exists so test
    /// harnesses can restore a known state between cases.
    pub fn reset(&mut self) {
        if let Some(graph) = self.active.take() {
            tracing::debug!(nodes = graph.len(), "reset discarded active graph");
        }
    }
}
