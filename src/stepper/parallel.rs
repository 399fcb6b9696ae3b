//! Data-parallel stepper on a rayon pool.

use rayon::prelude::*;

use crate::grid::Grid;
use crate::kernel::{assert_same_dims, step_span_raw};
use crate::stepper::sync::{SendConstPtr, SendPtr};
use crate::stepper::{partition, StepStrategy};

/// Statically scheduled parallel-for over the interior index space.
///
/// The pool is built once with a fixed worker count; each `step` drives
/// worker ids through `into_par_iter`, and every id covers exactly the
/// range the partition helper would hand [`ThreadedStepper`], so the two
/// concurrent steppers are output-identical by construction.
///
/// [`ThreadedStepper`]: crate::stepper::ThreadedStepper
pub struct ParallelStepper {
    pool: rayon::ThreadPool,
    workers: usize,
}

impl ParallelStepper {
    /// Build a dedicated pool with `workers` threads (clamped to at least 1).
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .expect("failed to build stepper rayon thread pool");
        Self { pool, workers }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl StepStrategy for ParallelStepper {
    fn step(&self, current: &Grid, next: &mut Grid) {
        assert_same_dims(current, next);
        let width = current.width();
        let total = current.interior_len();
        let workers = self.workers;
        let current_ptr = SendConstPtr::new(current.cells().as_ptr());
        let next_ptr = SendPtr::new(next.cells_mut().as_mut_ptr());

        // `install` blocks until the parallel iterator completes, giving the
        // same join-before-return guarantee as the scoped threads.
        self.pool.install(|| {
            (0..workers).into_par_iter().for_each(|worker_id| {
                let range = partition::worker_range(total, workers, worker_id);
                if range.is_empty() {
                    return;
                }
                // Safety: as in the threaded stepper — disjoint ranges,
                // read-only `current`.
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
        });
    }

    fn name(&self) -> &'static str {
        "data-parallel"
    }
}
