/*!
 * Dynamic-Quantum Scheduler Library
 * Single-resource cooperative scheduling with priority-derived slice lengths
 */

pub mod core;
pub mod events;
pub mod exec;
pub mod resources;
pub mod sched;

// Re-exports
pub use crate::core::errors::SchedulerError;
pub use crate::core::types::{Pid, Priority, SchedResult, WorkUnits};
pub use events::{Observer, RecordingObserver, SliceEvent};
pub use exec::{Executor, NoopExecutor, SimulatedExecutor};
pub use resources::{Node, ResourceGraph};
pub use sched::{Scheduler, Stats};
