//! Conway's Game of Life (B3/S23) on a halo-padded bounded grid, with three
//! output-equivalent step strategies: sequential, partitioned worker
//! threads, and a data-parallel rayon scheduler.

pub mod config;
pub mod grid;
pub mod kernel;
pub mod stepper;
pub mod world;

pub use config::{Config, ConfigError, Strategy};
pub use grid::Grid;
pub use stepper::{ParallelStepper, SequentialStepper, StepStrategy, ThreadedStepper};
pub use world::World;
