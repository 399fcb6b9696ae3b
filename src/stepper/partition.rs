//! Even partitioning of the linear interior index space.
//!
//! The interior's `width * height` cells are split into `workers` contiguous
//! half-open ranges. The remainder `total % workers` is spread one cell each
//! over the first workers, so range lengths differ by at most 1 and the
//! ranges tile `[0, total)` exactly.

use std::ops::Range;

/// The range worker `worker_id` owns when `total` cells are split across
/// `workers` workers. May be empty when `total < workers`.
#[inline]
pub fn worker_range(total: usize, workers: usize, worker_id: usize) -> Range<usize> {
    debug_assert!(workers > 0, "partition requires at least one worker");
    debug_assert!(worker_id < workers, "worker id {worker_id} out of range");
    let base = total / workers;
    let extra = total % workers;
    let start = worker_id * base + worker_id.min(extra);
    let len = base + (worker_id < extra) as usize;
    start..start + len
}

/// All `workers` ranges in worker order.
pub fn ranges(total: usize, workers: usize) -> Vec<Range<usize>> {
    (0..workers)
        .map(|id| worker_range(total, workers, id))
        .collect()
}
