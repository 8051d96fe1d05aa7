use crate::grid::Grid;
use crate::stability::StabilityDetector;

/// Transient state of a single run. Created when the run starts and dropped
/// once it returns; never shared between runs.
#[derive(Debug)] // Not Clone: the seen set grows with every generation
pub struct SimulationState {
    /// The current (pre-step) generation.
    pub grid: Grid,
    /// Every grid visited so far, for repetition detection.
    pub detector: StabilityDetector,
    /// Live cells summed over the seed and every computed generation.
    pub score: u64,
    /// Loop iterations entered so far.
    pub generations: u32,
    // Population trace, kept only when history recording is on.
    populations: Option<Vec<u32>>,
}

impl SimulationState {
    /// Starts a run from its seed grid. The seed's own population counts toward the score.
    pub fn new(seed: Grid, record_history: bool) -> Self {
        let seed_population = seed.population();
        let populations = if record_history { Some(vec![seed_population]) } else { None };

        Self {
            grid: seed,
            detector: StabilityDetector::new(),
            score: seed_population as u64,
            generations: 0,
            populations,
        }
    }

    /// Adds a computed generation's population to the score (and the trace).
    pub fn record_population(&mut self, population: u32) {
        self.score += population as u64;
        if let Some(trace) = self.populations.as_mut() {
            trace.push(population);
        }
    }

    /// Consumes the state, yielding the population trace if one was kept.
    pub fn into_populations(self) -> Option<Vec<u32>> {
        self.populations
    }
}
