use serde::{Serialize, Deserialize};
use std::fmt;

/// Why a run stopped iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The current grid had already been seen earlier in the run.
    Repetition,
    /// The next generation was identical to the current one.
    Stabilized,
    /// The next generation had no live cells.
    Extinct,
    /// The iteration budget ran out first.
    MaxGenerations,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Repetition => "repetition",
            Termination::Stabilized => "stabilized",
            Termination::Extinct => "extinct",
            Termination::MaxGenerations => "max_generations",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of simulating a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// The word exactly as it was passed in.
    pub word: String,
    /// Number of loop iterations entered before the run stopped.
    pub generations: u32,
    /// Live cells summed over the seed and every computed generation.
    pub score: u64,
    pub termination: Termination,
    /// Optional: population of the seed followed by each computed generation.
    /// Included only if `record_history` is enabled. Sums to `score`.
    #[serde(default, skip_serializing_if = "Option::is_none")] // Don't write "populations": null
    pub populations: Option<Vec<u32>>,
}

impl RunReport {
    /// The `(generations, score)` pair handed to collaborators.
    pub fn outcome(&self) -> (u32, u64) {
        (self.generations, self.score)
    }
}
