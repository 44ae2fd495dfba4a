//! Recording integration tests
//!
//! Exercises the full public surface the way a tracing layer would:
//! start a trace on the process-wide recorder, append nodes, finalize,
//! and query the resulting graph.

mod common;

mod end_to_end;
