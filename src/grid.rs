use std::fmt;
use wordlife_common::{GRID_HEIGHT, GRID_WIDTH};

// Bits above GRID_WIDTH are never set, so rows compare and hash by content alone.
const ROW_MASK: u64 = (1u64 << GRID_WIDTH) - 1;

/// A fixed `GRID_HEIGHT` x `GRID_WIDTH` board of binary cells.
///
/// Each row is packed into one `u64` (bit `c` holds column `c`). A grid is a
/// plain value: it is never mutated after construction, and two grids are
/// equal exactly when every cell matches.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [u64; GRID_HEIGHT],
}

impl Grid {
    /// An all-dead grid.
    pub fn empty() -> Self {
        Grid { rows: [0; GRID_HEIGHT] }
    }

    /// Builds a grid by asking `alive(row, col)` for every cell.
    pub fn from_fn<F>(mut alive: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut rows = [0u64; GRID_HEIGHT];
        for (row, bits) in rows.iter_mut().enumerate() {
            for col in 0..GRID_WIDTH {
                if alive(row, col) {
                    *bits |= 1u64 << col;
                }
            }
        }
        Grid { rows }
    }

    /// Builds a grid with the given `(row, col)` cells alive.
    /// Coordinates outside the grid are ignored.
    pub fn from_live_cells(cells: &[(usize, usize)]) -> Self {
        let mut rows = [0u64; GRID_HEIGHT];
        for &(row, col) in cells {
            if row < GRID_HEIGHT && col < GRID_WIDTH {
                rows[row] |= 1u64 << col;
            }
        }
        Grid { rows }
    }

    /// Whether the cell at `(row, col)` is alive. Out-of-range cells read as dead.
    #[inline(always)]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < GRID_HEIGHT && col < GRID_WIDTH && (self.rows[row] >> col) & 1 == 1
    }

    /// Total number of live cells.
    pub fn population(&self) -> u32 {
        self.rows.iter().map(|r| (r & ROW_MASK).count_ones()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    /// Packed row bitmasks, top row first.
    pub fn rows(&self) -> &[u64; GRID_HEIGHT] {
        &self.rows
    }

    /// Iterates `(row, col)` of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, &bits)| {
            (0..GRID_WIDTH)
                .filter(move |&col| (bits >> col) & 1 == 1)
                .map(move |col| (row, col))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::empty()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                f.write_str(if self.is_alive(row, col) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(population={})\n{}", self.population(), self)
    }
}

/// Places a bit sequence into an otherwise dead grid.
///
/// Bits are laid out `GRID_WIDTH` per row, the block of rows is centered
/// vertically around `GRID_HEIGHT / 2`, and each row is centered horizontally
/// (floor division, so odd slack lands on the right). Placement stops at the
/// first row that falls outside the grid: a 41-row seed loses its bottom row,
/// and a seed needing 42 or more rows starts above the grid and places nothing.
pub fn seed(bits: &[u8]) -> Grid {
    let rows_needed = bits.len().div_ceil(GRID_WIDTH);
    let start_row = (GRID_HEIGHT / 2) as isize - (rows_needed / 2) as isize;

    let mut rows = [0u64; GRID_HEIGHT];
    for (offset, row_bits) in bits.chunks(GRID_WIDTH).enumerate() {
        let row = start_row + offset as isize;
        if row < 0 || row >= GRID_HEIGHT as isize {
            break;
        }

        let start_col = (GRID_WIDTH - row_bits.len()) / 2;
        for (c, &bit) in row_bits.iter().enumerate() {
            if bit != 0 {
                rows[row as usize] |= 1u64 << (start_col + c);
            }
        }
    }
    Grid { rows }
}

/// Counts live cells in the 8-cell Moore neighborhood of `(row, col)`.
/// Positions beyond the border count as dead; there is no wraparound.
#[inline(always)]
pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let r = row as isize + dy;
            let c = col as isize + dx;

            // Check if neighbor is within bounds
            let in_bounds =
                r >= 0 && r < GRID_HEIGHT as isize && c >= 0 && c < GRID_WIDTH as isize;
            if in_bounds && grid.is_alive(r as usize, c as usize) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn empty_bits_give_dead_grid() {
        let grid = seed(&[]);
        assert!(grid.is_empty());
        assert_eq!(grid, Grid::empty());
    }

    #[test]
    fn single_letter_is_centered_in_middle_row() {
        let grid = seed(&encode("A"));
        // 8 bits in one row: start_row = 20, start_col = (60 - 8) / 2 = 26
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(20, 27), (20, 33)]);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn overflow_bits_wrap_to_next_centered_row() {
        // 8 chars = 64 bits: 60 on the first row, 4 on the second
        let bits = vec![1u8; 64];
        let grid = seed(&bits);
        // rows_needed = 2, start_row = 20 - 1 = 19
        assert_eq!(grid.rows()[19], ROW_MASK);
        // 4 bits starting at column (60 - 4) / 2 = 28
        assert_eq!(grid.rows()[20], 0b1111 << 28);
        assert_eq!(grid.population(), 64);
    }

    #[test]
    fn odd_slack_falls_on_the_right() {
        let bits = vec![1u8; 7];
        let grid = seed(&bits);
        // (60 - 7) / 2 = 26, so columns 26..33 leaving 26 left and 27 right
        assert!(!grid.is_alive(20, 25));
        assert!(grid.is_alive(20, 26));
        assert!(grid.is_alive(20, 32));
        assert!(!grid.is_alive(20, 33));
    }

    #[test]
    fn forty_one_rows_lose_the_bottom_row() {
        // 41 full rows: start_row = 20 - 20 = 0, last row would be 40
        let bits = vec![1u8; 41 * GRID_WIDTH];
        let grid = seed(&bits);
        assert_eq!(grid.population() as usize, GRID_HEIGHT * GRID_WIDTH);
    }

    #[test]
    fn seed_starting_above_the_grid_places_nothing() {
        // 42 rows: start_row = 20 - 21 = -1, placement stops immediately
        assert!(seed(&vec![1u8; 41 * GRID_WIDTH + 1]).is_empty());
        // 44 rows: start_row = -2
        assert!(seed(&vec![1u8; 44 * GRID_WIDTH]).is_empty());
        // 308 chars = 2464 bits = 42 rows
        assert!(seed(&encode(&"x".repeat(308))).is_empty());
        // 307 chars = 2456 bits = 41 rows, only the bottom row is lost
        assert!(!seed(&encode(&"x".repeat(307))).is_empty());
    }

    #[test]
    fn corners_never_see_more_than_three_neighbors() {
        let full = Grid::from_fn(|_, _| true);
        let last_row = GRID_HEIGHT - 1;
        let last_col = GRID_WIDTH - 1;
        for &(r, c) in &[(0, 0), (0, last_col), (last_row, 0), (last_row, last_col)] {
            assert_eq!(count_alive_neighbors(&full, r, c), 3);
        }
    }

    #[test]
    fn edges_and_interior_on_a_full_grid() {
        let full = Grid::from_fn(|_, _| true);
        for col in 1..GRID_WIDTH - 1 {
            assert_eq!(count_alive_neighbors(&full, 0, col), 5);
            assert_eq!(count_alive_neighbors(&full, GRID_HEIGHT - 1, col), 5);
        }
        for row in 1..GRID_HEIGHT - 1 {
            assert_eq!(count_alive_neighbors(&full, row, 0), 5);
            assert_eq!(count_alive_neighbors(&full, row, GRID_WIDTH - 1), 5);
        }
        assert_eq!(count_alive_neighbors(&full, 20, 30), 8);
    }

    #[test]
    fn cell_does_not_count_itself() {
        let grid = Grid::from_live_cells(&[(5, 5)]);
        assert_eq!(count_alive_neighbors(&grid, 5, 5), 0);
        assert_eq!(count_alive_neighbors(&grid, 4, 4), 1);
        assert_eq!(count_alive_neighbors(&grid, 5, 7), 0);
    }

    #[test]
    fn no_wraparound_across_borders() {
        let grid = Grid::from_live_cells(&[(0, GRID_WIDTH - 1), (GRID_HEIGHT - 1, 0)]);
        assert_eq!(count_alive_neighbors(&grid, 0, 0), 0);
        assert_eq!(count_alive_neighbors(&grid, GRID_HEIGHT - 1, GRID_WIDTH - 1), 0);
    }

    #[test]
    fn out_of_range_live_cells_are_ignored() {
        let grid = Grid::from_live_cells(&[(GRID_HEIGHT, 0), (0, GRID_WIDTH), (1, 1)]);
        assert_eq!(grid.population(), 1);
    }
}
