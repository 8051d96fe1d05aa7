use crate::grid::Grid;
use std::collections::HashSet;
use wordlife_common::Termination;

/// Remembers every grid a run has visited and classifies how the run ends.
#[derive(Debug, Default)]
pub struct StabilityDetector {
    seen: HashSet<Grid>,
}

impl StabilityDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` as visited. Returns `true` if it had already been seen,
    /// in which case the run ends before stepping.
    pub fn check_repetition(&mut self, grid: &Grid) -> bool {
        !self.seen.insert(*grid)
    }

    /// Number of distinct grids recorded so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Classifies a freshly computed generation against the grid it came from.
    ///
    /// A fixed point stops the run, and so does an all-dead generation. An
    /// all-dead generation reached from an all-dead grid satisfies both and is
    /// reported as extinction.
    pub fn settle(current: &Grid, next: &Grid) -> Option<Termination> {
        if next.is_empty() {
            Some(Termination::Extinct)
        } else if next == current {
            Some(Termination::Stabilized)
        } else {
            None
        }
    }
}
