/*!
 * Core Types
 * Common types used across the scheduler
 */

/// Process ID type
pub type Pid = u32;

/// Priority level; smaller value = higher scheduling priority.
/// Any integer is accepted, including negatives.
pub type Priority = i32;

/// Work units (abstract CPU time). Signed so that a process registered
/// with a non-positive burst can drive its remaining counter below zero
/// without wrapping; completion is checked as `remaining <= 0`.
pub type WorkUnits = i64;

/// Common result type for scheduler operations
pub type SchedResult<T> = Result<T, super::errors::SchedulerError>;
