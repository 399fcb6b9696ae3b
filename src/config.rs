//! Run configuration: grid dimensions, worker count, strategy selection.
//!
//! Everything here is resolved once at startup and immutable afterwards;
//! the steppers receive explicit values instead of reading process-wide
//! state. Mid-run resizing is not supported.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::stepper::{ParallelStepper, SequentialStepper, StepStrategy, ThreadedStepper};

/// Fewest workers the concurrent strategies accept from configuration.
pub const MIN_WORKERS: usize = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown strategy {0:?} (expected sequential, threaded, or data-parallel)")]
    UnknownStrategy(String),
    #[error("{name} must be positive, got {value}")]
    ZeroDimension { name: &'static str, value: usize },
    #[error("worker count must be at least {MIN_WORKERS}, got {0}")]
    WorkerCount(usize),
}

/// Which stepper implementation drives each generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Threaded,
    DataParallel,
}

impl Strategy {
    /// Instantiate the stepper this strategy names. `workers` is ignored by
    /// the sequential strategy.
    pub fn build(self, workers: usize) -> Box<dyn StepStrategy> {
        match self {
            Strategy::Sequential => Box::new(SequentialStepper::new()),
            Strategy::Threaded => Box::new(ThreadedStepper::new(workers)),
            Strategy::DataParallel => Box::new(ParallelStepper::new(workers)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Threaded => "threaded",
            Strategy::DataParallel => "data-parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Exactly three names are recognized; anything else is an error rather
    /// than a silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Strategy::Sequential),
            "threaded" => Ok(Strategy::Threaded),
            "data-parallel" => Ok(Strategy::DataParallel),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Validated, immutable run configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
    pub workers: usize,
    pub strategy: Strategy,
}

impl Default for Config {
    /// Defaults mirror the classic demo: an 800x600 window at 5 pixels per
    /// cell (a 160x120 grid) and 8 workers on the threaded strategy.
    fn default() -> Self {
        Self {
            width: 160,
            height: 120,
            cell_size: 5,
            workers: 8,
            strategy: Strategy::Threaded,
        }
    }
}

impl Config {
    /// Derive grid dimensions from window pixels and cell size, the way the
    /// windowed demo sizes its grid.
    pub fn from_window(window_width: usize, window_height: usize, cell_size: usize) -> Self {
        let cell = cell_size.max(1);
        Self {
            width: window_width / cell,
            height: window_height / cell,
            cell_size: cell,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("grid width", self.width),
            ("grid height", self.height),
            ("cell size", self.cell_size),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDimension { name, value });
            }
        }
        if self.workers < MIN_WORKERS {
            return Err(ConfigError::WorkerCount(self.workers));
        }
        Ok(())
    }

    /// Build the configured stepper. Fails if the configuration is invalid;
    /// a validated config always succeeds.
    pub fn build_stepper(&self) -> Result<Box<dyn StepStrategy>, ConfigError> {
        self.validate()?;
        Ok(self.strategy.build(self.workers))
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, Strategy, MIN_WORKERS};

    #[test]
    fn strategy_names_round_trip() {
        for strategy in [
            Strategy::Sequential,
            Strategy::Threaded,
            Strategy::DataParallel,
        ] {
            assert_eq!(strategy.as_str().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = "OMP".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStrategy(s) if s == "OMP"));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let config = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDimension { name: "grid width", .. })
        ));
    }

    #[test]
    fn worker_floor_is_enforced() {
        let config = Config {
            workers: MIN_WORKERS - 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WorkerCount(1))
        ));
    }

    #[test]
    fn window_division_matches_demo() {
        let config = Config::from_window(800, 600, 5);
        assert_eq!((config.width, config.height), (160, 120));
        assert!(config.validate().is_ok());
    }
}
