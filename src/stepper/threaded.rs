//! Partitioned worker-thread stepper.

use crate::grid::Grid;
use crate::kernel::{assert_same_dims, step_span_raw};
use crate::stepper::sync::{SendConstPtr, SendPtr};
use crate::stepper::{partition, StepStrategy};

/// Splits the interior index space into `workers` contiguous ranges and
/// runs one scoped thread per non-empty range. The scope joins every worker
/// before `step` returns, so the caller always observes a fully-computed
/// `next` buffer.
#[derive(Clone, Copy, Debug)]
pub struct ThreadedStepper {
    workers: usize,
}

impl ThreadedStepper {
    /// `workers` is clamped to at least 1; a single worker degenerates to
    /// the sequential pass over the full range.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl StepStrategy for ThreadedStepper {
    fn step(&self, current: &Grid, next: &mut Grid) {
        assert_same_dims(current, next);
        let width = current.width();
        let total = current.interior_len();
        let current_ptr = SendConstPtr::new(current.cells().as_ptr());
        let next_ptr = SendPtr::new(next.cells_mut().as_mut_ptr());

        std::thread::scope(|scope| {
            for range in partition::ranges(total, self.workers) {
                if range.is_empty() {
                    continue;
                }
                scope.spawn(move || {
                    // Safety: partition ranges are disjoint and inside
                    // [0, total), and `current` is not written during the
                    // scope's lifetime.
                    unsafe {
                        step_span_raw(
                            current_ptr.get(),
                            next_ptr.get(),
                            width,
                            range.start,
                            range.end,
                        );
                    }
                });
            }
        });
    }

    fn name(&self) -> &'static str {
        "threaded"
    }
}
