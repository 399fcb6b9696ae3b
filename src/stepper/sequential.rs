//! Single-threaded reference stepper.

use crate::grid::Grid;
use crate::kernel::{assert_same_dims, step_span};
use crate::stepper::StepStrategy;

/// One row-major pass over the whole interior. This is the correctness
/// oracle the concurrent steppers must match bit-for-bit.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialStepper;

impl SequentialStepper {
    pub fn new() -> Self {
        Self
    }
}

impl StepStrategy for SequentialStepper {
    fn step(&self, current: &Grid, next: &mut Grid) {
        assert_same_dims(current, next);
        let width = current.width();
        let total = current.interior_len();
        step_span(current.cells(), next.cells_mut(), width, 0, total);
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
