use serde::{Deserialize, Serialize};

/// Number of columns in every grid.
pub const GRID_WIDTH: usize = 60;
/// Number of rows in every grid.
pub const GRID_HEIGHT: usize = 40;
/// Hard cap on the number of generations a single run may iterate.
pub const MAX_GENERATIONS: u32 = 1000;
/// Each character of a word contributes one 8-bit group.
pub const BITS_PER_CHAR: usize = 8;

/// Simulation parameters derived from the configuration, consulted on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimParams {
    /// Iteration budget for a run. Never larger than `MAX_GENERATIONS`.
    pub max_generations: u32,
    /// Keep the per-generation population trace in the run report.
    pub record_history: bool,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            max_generations: MAX_GENERATIONS,
            record_history: false,
        }
    }
}
