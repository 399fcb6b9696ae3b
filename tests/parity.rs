//! Strategy-equivalence suite: every stepper must match the sequential
//! oracle bit-for-bit on the same input.

use std::collections::HashSet;

use halo_life::{Grid, ParallelStepper, SequentialStepper, StepStrategy, ThreadedStepper};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_grid(width: usize, height: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(width, height);
    let mut rng = StdRng::seed_from_u64(seed);
    grid.seed_random(&mut rng);
    grid
}

fn collect_live(grid: &Grid) -> HashSet<(usize, usize)> {
    let mut out = HashSet::new();
    grid.for_each_live(|x, y| {
        out.insert((x, y));
    });
    out
}

fn stepped(stepper: &dyn StepStrategy, start: &Grid, steps: u64) -> Grid {
    let mut a = start.clone();
    let mut b = Grid::new(start.width(), start.height());
    for _ in 0..steps {
        stepper.step(&a, &mut b);
        std::mem::swap(&mut a, &mut b);
    }
    a
}

fn run_parity_case(width: usize, height: usize, workers: usize, steps: u64, seed: u64) {
    let start = seeded_grid(width, height, seed);

    let oracle = stepped(&SequentialStepper::new(), &start, steps);
    let threaded = stepped(&ThreadedStepper::new(workers), &start, steps);
    let parallel = stepped(&ParallelStepper::new(workers), &start, steps);

    let oracle_live = collect_live(&oracle);
    assert_eq!(
        collect_live(&threaded),
        oracle_live,
        "threaded diverged for {width}x{height} workers {workers} seed {seed}"
    );
    assert_eq!(
        collect_live(&parallel),
        oracle_live,
        "data-parallel diverged for {width}x{height} workers {workers} seed {seed}"
    );
}

#[test]
fn parity_across_worker_counts() {
    for workers in [2, 3, 5, 8] {
        run_parity_case(96, 96, workers, 6, 0xA1);
    }
}

#[test]
fn parity_multiple_seeds() {
    for seed in [11u64, 22, 33, 44] {
        run_parity_case(72, 72, 4, 7, seed);
    }
}

#[test]
fn parity_awkward_dimensions() {
    // Interior sizes that do not divide evenly across the workers.
    run_parity_case(1, 1, 8, 3, 0xB2);
    run_parity_case(7, 3, 5, 4, 0xB2);
    run_parity_case(13, 1, 4, 4, 0xB2);
    run_parity_case(160, 120, 7, 2, 0xB2);
}

#[test]
fn parity_single_step_bit_for_bit() {
    let start = seeded_grid(64, 48, 0xC3);
    let width = start.width();
    let height = start.height();

    let mut oracle = Grid::new(width, height);
    SequentialStepper::new().step(&start, &mut oracle);

    for workers in [2usize, 6] {
        let mut threaded = Grid::new(width, height);
        ThreadedStepper::new(workers).step(&start, &mut threaded);
        let mut parallel = Grid::new(width, height);
        ParallelStepper::new(workers).step(&start, &mut parallel);

        for y in 1..=height {
            for x in 1..=width {
                assert_eq!(threaded.get(x, y), oracle.get(x, y), "threaded at ({x},{y})");
                assert_eq!(
                    parallel.get(x, y),
                    oracle.get(x, y),
                    "data-parallel at ({x},{y})"
                );
            }
        }
    }
}
