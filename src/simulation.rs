use crate::encoder::encode;
use crate::grid::{seed, Grid};
use crate::sim_state::SimulationState;
use crate::stability::StabilityDetector;
use crate::stepper::step;
use anyhow::Result;
use log::{debug, trace};
use wordlife_common::{RunReport, SimParams, Termination, MAX_GENERATIONS};

/// Everything a finished run produced, before it is attached to a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evolution {
    pub generations: u32,
    pub score: u64,
    pub termination: Termination,
    /// Seed population followed by each computed generation's population,
    /// if history recording was on.
    pub populations: Option<Vec<u32>>,
    /// The current grid when the loop stopped (the grid that repeated,
    /// stabilized, or preceded extinction).
    pub final_grid: Grid,
}

/// Runs word-seeded Game of Life simulations.
///
/// A `Simulator` holds only its parameters; every run builds and drops its own
/// state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    params: SimParams,
}

impl Simulator {
    /// Creates a simulator, rejecting iteration budgets outside `1..=MAX_GENERATIONS`.
    pub fn new(params: SimParams) -> Result<Self> {
        if params.max_generations == 0 {
            anyhow::bail!("max_generations must be greater than 0.");
        }
        if params.max_generations > MAX_GENERATIONS {
            anyhow::bail!(
                "max_generations ({}) exceeds the hard cap of {}.",
                params.max_generations, MAX_GENERATIONS
            );
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Simulates `word` and returns `(generations, score)`.
    pub fn run(&self, word: &str) -> (u32, u64) {
        let evolution = self.evolve(seed(&encode(word)));
        (evolution.generations, evolution.score)
    }

    /// Simulates `word` and returns the full report.
    pub fn run_report(&self, word: &str) -> RunReport {
        let evolution = self.evolve(seed(&encode(word)));
        debug!(
            "Word '{}' stopped by {} after {} generations with score {}.",
            word, evolution.termination, evolution.generations, evolution.score
        );

        RunReport {
            word: word.to_string(),
            generations: evolution.generations,
            score: evolution.score,
            termination: evolution.termination,
            populations: evolution.populations,
        }
    }

    /// Runs the generation loop from an arbitrary seed grid.
    ///
    /// Each iteration first checks the current grid for repetition (stopping
    /// without stepping or scoring), then steps, scores the new generation,
    /// and stops on a fixed point or extinction. Running out of budget is a
    /// normal outcome.
    pub fn evolve(&self, seed: Grid) -> Evolution {
        let mut state = SimulationState::new(seed, self.params.record_history);

        let termination = loop {
            if state.generations >= self.params.max_generations {
                break Termination::MaxGenerations;
            }
            state.generations += 1;

            // --- 1. Repetition: the current grid was visited before ---
            if state.detector.check_repetition(&state.grid) {
                break Termination::Repetition;
            }

            // --- 2. Step and score the next generation ---
            let next = step(&state.grid);
            let population = next.population();
            state.record_population(population);
            trace!(
                "Generation {} | Population: {} | Score: {}",
                state.generations, population, state.score
            );

            // --- 3. Stabilization or extinction ---
            if let Some(termination) = StabilityDetector::settle(&state.grid, &next) {
                break termination;
            }

            state.grid = next;
        };

        let generations = state.generations;
        let score = state.score;
        let final_grid = state.grid;
        Evolution {
            generations,
            score,
            termination,
            populations: state.into_populations(),
            final_grid,
        }
    }
}
