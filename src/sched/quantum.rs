/*!
 * Dynamic Quantum Policy
 * Slice length derived from priority and remaining work
 */

use crate::core::types::{Priority, WorkUnits};

/// Compute the slice length for one scheduling decision.
///
/// `base - 2*priority`, clamped to at most the remaining work (a process
/// never overruns what it still needs) and at least 1 (every slice makes
/// progress, so a run terminates in at most sum-of-bursts slices).
/// Smaller priority values get longer slices.
pub(super) fn dynamic_quantum(
    base: WorkUnits,
    priority: Priority,
    remaining: WorkUnits,
) -> WorkUnits {
    (base - 2 * WorkUnits::from(priority)).min(remaining).max(1)
}
