//! Generation steppers: three interchangeable strategies.
//!
//! Every stepper reads `current`, writes every interior cell of `next`, and
//! returns only once the whole generation is computed. The strategies are
//! output-equivalent; the sequential pass is the oracle for the other two.

mod parallel;
pub mod partition;
mod sequential;
pub(crate) mod sync;
mod threaded;

pub use parallel::ParallelStepper;
pub use sequential::SequentialStepper;
pub use threaded::ThreadedStepper;

use crate::grid::Grid;

/// One generation step: read `current`, overwrite `next`'s interior.
///
/// Implementations borrow both grids only for the duration of the call and
/// never retain a reference. The previous contents of `next` are don't-care.
pub trait StepStrategy: Send + Sync {
    fn step(&self, current: &Grid, next: &mut Grid);

    /// Human-readable strategy name for logs.
    fn name(&self) -> &'static str;
}
