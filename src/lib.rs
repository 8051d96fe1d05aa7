//! Word-seeded Game of Life.
//!
//! A word is turned into its 8-bit character pattern, centered on a fixed
//! 60x40 grid, and evolved under B3/S23 until the grid repeats, freezes, dies
//! out, or the 1000-generation budget runs out. The result is the number of
//! generations entered and the score: live cells summed over the seed and
//! every computed generation.

pub mod batch;
pub mod encoder;
pub mod grid;
pub mod output;
pub mod sim_state;
pub mod simulation;
pub mod stability;
pub mod stepper;

pub use encoder::encode;
pub use grid::{count_alive_neighbors, seed, Grid};
pub use simulation::{Evolution, Simulator};
pub use stepper::step;
pub use wordlife_common::{
    RunReport, SimParams, Termination, GRID_HEIGHT, GRID_WIDTH, MAX_GENERATIONS,
};

/// Simulates `word` with the default budget and returns `(generations, score)`.
/// Accepts any string, including the empty one.
pub fn run(word: &str) -> (u32, u64) {
    Simulator::default().run(word)
}
