use crate::grid::{count_alive_neighbors, Grid};

/// B3/S23: a live cell survives on 2 or 3 neighbors, a dead cell is born on exactly 3.
#[inline(always)]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Computes the next generation.
///
/// Every cell is evaluated against the unmodified input grid; the result is a
/// fresh grid and `grid` is left untouched.
pub fn step(grid: &Grid) -> Grid {
    Grid::from_fn(|row, col| {
        next_state(grid.is_alive(row, col), count_alive_neighbors(grid, row, col))
    })
}
