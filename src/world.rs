//! Double-buffered world: owns the generation pair and the role swap.

use rand::Rng;

use crate::grid::Grid;
use crate::stepper::StepStrategy;

/// Owns two same-dimension grids and tracks which one is "current".
///
/// `advance` runs one stepper over (current, next) and then flips the role
/// index; the swap is O(1) and never copies cell data. `&mut self` on
/// `advance` enforces the single-writer-at-a-time discipline: no two steps
/// can overlap on the same world.
pub struct World {
    buffers: [Grid; 2],
    current: usize,
    generation: u64,
}

impl World {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffers: [Grid::new(width, height), Grid::new(width, height)],
            current: 0,
            generation: 0,
        }
    }

    /// Seed the current buffer's interior from a uniform boolean draw.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.buffers[self.current].seed_random(rng);
    }

    /// The grid the renderer should read this frame.
    #[inline]
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// Mutable access to the current buffer, for pattern setup.
    #[inline]
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.current]
    }

    /// Generations computed since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute one generation with `stepper`, then swap roles.
    ///
    /// Strategies are interchangeable per call: any sequence of steppers
    /// yields the same trajectory as the sequential oracle alone.
    pub fn advance(&mut self, stepper: &dyn StepStrategy) {
        let (a, b) = self.buffers.split_at_mut(1);
        let (current, next) = if self.current == 0 {
            (&a[0], &mut b[0])
        } else {
            (&b[0], &mut a[0])
        };
        stepper.step(current, next);
        self.current ^= 1;
        self.generation += 1;
    }
}
