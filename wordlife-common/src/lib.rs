pub mod config;
pub mod report;
pub mod sim_params;

// Re-export key types for easier use by dependent crates
pub use config::{SimulationConfig, RunConfig, BatchConfig, OutputConfig};
pub use report::{RunReport, Termination};
pub use sim_params::{SimParams, GRID_WIDTH, GRID_HEIGHT, MAX_GENERATIONS, BITS_PER_CHAR};
