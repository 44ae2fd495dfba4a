//! Shared helpers for recording tests.

use parking_lot::Mutex;

/// The process-wide recorder is shared by every test in this binary;
/// tests that touch it hold this lock for their full duration.
static GLOBAL_RECORDER_LOCK: Mutex<()> = Mutex::new(());

/// Take exclusive use of the process-wide recorder and reset it to a
/// known state.
pub fn exclusive_recorder() -> parking_lot::MutexGuard<'static, ()> {
    let guard = GLOBAL_RECORDER_LOCK.lock();
    tracegraph::reset_recording();
    guard
}
