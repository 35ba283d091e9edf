/*!
 * Scheduler Core Operations
 * Process registration and the scheduling loop
 */

use super::entry::Entry;
use super::quantum::dynamic_quantum;
use super::{Scheduler, Stats};
use crate::core::types::{Pid, Priority, WorkUnits};
use crate::events::SliceEvent;
use crate::exec::Executor;
use log::info;
use std::sync::atomic::Ordering;

impl Scheduler {
    /// Register a process with its total work and priority.
    ///
    /// The caller is trusted: `burst` is expected to be positive. A
    /// non-positive burst is still accepted and retires after a single
    /// clamped slice (the completion check is `remaining <= 0`).
    pub fn add_process(&self, pid: Pid, burst: WorkUnits, priority: Priority) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let entry = Entry::new(pid, burst, priority, seq);

        self.ready.write().push(entry);
        self.stats.inc_added();

        info!(
            "Process {} added (burst: {}, priority: {})",
            pid, burst, priority
        );
    }

    /// Drive the scheduling loop until the ready queue is empty.
    ///
    /// Each iteration pops the smallest-priority process (FIFO among
    /// equals), computes its dynamic quantum, invokes the executor for
    /// that slice, charges the work, and requeues the process if any
    /// remains. Slices are strictly sequential: the executor runs to
    /// completion before the next decision.
    pub fn run(&self, executor: &dyn Executor) {
        loop {
            let mut current = match self.ready.write().pop() {
                Some(entry) => entry,
                None => break,
            };

            let quantum = dynamic_quantum(self.base_quantum, current.priority, current.remaining);
            executor.execute_slice(current.pid, quantum);

            current.remaining -= quantum;
            self.stats.record_slice(quantum);

            let completed = current.remaining <= 0;
            self.emit(SliceEvent {
                pid: current.pid,
                quantum,
                remaining_after: current.remaining,
                completed,
            });

            if completed {
                self.stats.inc_completed();
                info!("Process {} completed", current.pid);
            } else {
                // Fresh sequence number: requeue behind waiting equals
                current.seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                self.ready.write().push(current);
            }
        }
    }

    fn emit(&self, event: SliceEvent) {
        if let Some(ref observer) = self.observer {
            observer.on_slice(&event);
        }
    }

    /// Number of processes waiting in the ready queue
    pub fn len(&self) -> usize {
        self.ready.read().len()
    }

    /// Check if the ready queue is empty
    pub fn is_empty(&self) -> bool {
        self.ready.read().is_empty()
    }

    /// Get scheduler statistics (lock-free snapshot)
    pub fn stats(&self) -> Stats {
        self.stats.snapshot()
    }
}
