/*!
 * Dynamic-Quantum Scheduler
 * Priority-ordered ready queue with priority-derived slice lengths
 *
 * One logical execution resource, cooperative within a slice: the loop
 * pops the highest-priority process (smallest priority value), hands it
 * a quantum derived from its priority and remaining work, charges the
 * slice, and requeues it until its work is gone.
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{SchedResult, WorkUnits};
use crate::events::Observer;
use log::info;
use parking_lot::RwLock;
use std::collections::BinaryHeap;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod entry;
mod operations;
mod quantum;
mod stats;

pub use stats::Stats;

use entry::Entry;
use stats::AtomicStats;

/// Single-resource scheduler with dynamic quanta
pub struct Scheduler {
    /// Positive, immutable after construction
    base_quantum: WorkUnits,

    // Ready queue: min-by-priority, FIFO among equals
    ready: Arc<RwLock<BinaryHeap<Entry>>>,

    // Arrival sequence counter backing the FIFO tie-break
    next_seq: Arc<AtomicU64>,

    // Statistics - lock-free atomics for loop-path updates
    stats: Arc<AtomicStats>,

    // Caller-supplied observer for slice events
    observer: Option<Arc<dyn Observer>>,
}

impl Scheduler {
    /// Create a scheduler with the given base quantum
    pub fn new(base_quantum: WorkUnits) -> SchedResult<Self> {
        if base_quantum <= 0 {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "base quantum must be positive, got {base_quantum}"
            )));
        }

        info!("Scheduler initialized: base_quantum={}", base_quantum);

        Ok(Self {
            base_quantum,
            ready: Arc::new(RwLock::new(BinaryHeap::new())),
            next_seq: Arc::new(AtomicU64::new(0)),
            stats: Arc::new(AtomicStats::new(base_quantum)),
            observer: None,
        })
    }

    /// Attach a slice-event observer
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Set observer after construction
    pub fn set_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observer = Some(observer);
    }

    /// Configured base quantum
    pub fn base_quantum(&self) -> WorkUnits {
        self.base_quantum
    }
}

impl Clone for Scheduler {
    fn clone(&self) -> Self {
        Self {
            base_quantum: self.base_quantum,
            ready: Arc::clone(&self.ready),
            next_seq: Arc::clone(&self.next_seq),
            stats: Arc::clone(&self.stats),
            observer: self.observer.as_ref().map(Arc::clone),
        }
    }
}
