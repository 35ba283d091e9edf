/*!
 * Ready-Queue Entry
 * Internal record for a process waiting on the execution resource
 */

use crate::core::types::{Pid, Priority, WorkUnits};

/// Process scheduling entry
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub pid: Pid,
    pub priority: Priority,
    /// Original burst, kept as historical reference only
    #[allow(dead_code)]
    pub burst: WorkUnits,
    pub remaining: WorkUnits,
    /// Arrival sequence number; FIFO tie-break among equal priorities.
    /// A requeued process receives a fresh number, so it re-enters
    /// behind already-waiting equals.
    pub seq: u64,
}

impl Entry {
    pub fn new(pid: Pid, burst: WorkUnits, priority: Priority, seq: u64) -> Self {
        Self {
            pid,
            priority,
            burst,
            remaining: burst,
            seq,
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.pid == other.pid && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap; reverse both keys so the smallest
        // priority value pops first, earliest arrival among equals
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
