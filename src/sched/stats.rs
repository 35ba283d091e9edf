/*!
 * Lock-Free Scheduler Statistics
 * Atomic counters for zero-contention tracking in the scheduling loop
 */

use crate::core::types::WorkUnits;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Atomic scheduler statistics for lock-free updates
pub(super) struct AtomicStats {
    slices: AtomicU64,
    work_executed: AtomicU64,
    processes_added: AtomicU64,
    processes_completed: AtomicU64,
    active_processes: AtomicUsize,
    base_quantum: WorkUnits,
}

impl AtomicStats {
    #[inline]
    pub fn new(base_quantum: WorkUnits) -> Self {
        Self {
            slices: AtomicU64::new(0),
            work_executed: AtomicU64::new(0),
            processes_added: AtomicU64::new(0),
            processes_completed: AtomicU64::new(0),
            active_processes: AtomicUsize::new(0),
            base_quantum,
        }
    }

    /// Record one executed slice (hot path)
    #[inline(always)]
    pub fn record_slice(&self, quantum: WorkUnits) {
        self.slices.fetch_add(1, Ordering::Relaxed);
        self.work_executed
            .fetch_add(quantum.max(0) as u64, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_added(&self) {
        self.processes_added.fetch_add(1, Ordering::Relaxed);
        self.active_processes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_completed(&self) {
        self.processes_completed.fetch_add(1, Ordering::Relaxed);
        self.active_processes.fetch_sub(1, Ordering::Relaxed);
    }

    /// Snapshot of current stats (no synchronization required)
    #[inline]
    pub fn snapshot(&self) -> Stats {
        Stats {
            slices: self.slices.load(Ordering::Relaxed),
            work_executed: self.work_executed.load(Ordering::Relaxed),
            processes_added: self.processes_added.load(Ordering::Relaxed),
            processes_completed: self.processes_completed.load(Ordering::Relaxed),
            active_processes: self.active_processes.load(Ordering::Relaxed),
            base_quantum: self.base_quantum,
        }
    }
}

/// Point-in-time scheduler statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Slices handed to the executor
    pub slices: u64,
    /// Total work units charged across all slices
    pub work_executed: u64,
    /// Processes ever registered
    pub processes_added: u64,
    /// Processes that reached the completed state
    pub processes_completed: u64,
    /// Processes registered but not yet completed
    pub active_processes: usize,
    /// Configured base quantum
    pub base_quantum: WorkUnits,
}
