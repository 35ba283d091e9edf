/*!
 * Slice Events
 * Structured scheduling events delivered to a caller-supplied observer
 */

use crate::core::types::{Pid, WorkUnits};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One execution slice, as observed by the scheduling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceEvent {
    /// Process that occupied the execution resource
    pub pid: Pid,
    /// Slice length handed to the executor
    pub quantum: WorkUnits,
    /// Remaining work after the slice was charged (negative only for
    /// processes registered with a non-positive burst)
    pub remaining_after: WorkUnits,
    /// Whether this slice retired the process
    pub completed: bool,
}

/// Observer for slice events
///
/// Implementations must not re-enter the scheduler: events are emitted
/// from inside the scheduling loop.
pub trait Observer: Send + Sync {
    fn on_slice(&self, event: &SliceEvent);
}

/// Observer that records every slice in arrival order
///
/// Captures the full execution order of a run, which is what most tests
/// (and callers interested in a trace) want.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SliceEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, in emission order
    pub fn events(&self) -> Vec<SliceEvent> {
        self.events.lock().clone()
    }

    /// Number of events recorded so far
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Observer for RecordingObserver {
    fn on_slice(&self, event: &SliceEvent) {
        self.events.lock().push(*event);
    }
}
