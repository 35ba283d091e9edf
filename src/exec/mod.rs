/*!
 * Slice Executors
 * External execution seam invoked once per scheduled slice
 */

use crate::core::types::{Pid, WorkUnits};
use log::info;
use std::time::Duration;

/// Performs (or simulates) one execution slice
///
/// The scheduler invokes this fire-and-forget: it consumes no result
/// beyond "a slice of `quantum` units has elapsed". The call runs to
/// completion before the next scheduling decision; it is the only step
/// of the loop allowed to take wall-clock time.
pub trait Executor: Send + Sync {
    fn execute_slice(&self, pid: Pid, quantum: WorkUnits);
}

/// Executor that logs each slice and optionally sleeps a fixed delay,
/// simulating the time the slice would occupy the resource
#[derive(Debug, Clone, Default)]
pub struct SimulatedExecutor {
    delay: Option<Duration>,
}

impl SimulatedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate each slice with a fixed wall-clock delay
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay: Some(delay) }
    }
}

impl Executor for SimulatedExecutor {
    fn execute_slice(&self, pid: Pid, quantum: WorkUnits) {
        info!("Executing process {} for {} units", pid, quantum);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
    }
}

/// Executor that does nothing; for tests and benchmarks
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExecutor;

impl Executor for NoopExecutor {
    fn execute_slice(&self, _pid: Pid, _quantum: WorkUnits) {}
}
