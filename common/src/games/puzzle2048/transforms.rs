//! Board symmetries used to express every move as a move to the left.
//!
//! Both functions build a fresh grid; the input is never touched.

use super::grid::Grid;

/// Mirrors each row left to right.
pub fn reverse(grid: &Grid) -> Grid {
    let cells = grid
        .rows()
        .flat_map(|row| row.iter().rev().copied())
        .collect();
    Grid::from_cells(grid.size(), cells)
}

/// Swaps rows and columns: `[i][j]` becomes `[j][i]`.
pub fn transpose(grid: &Grid) -> Grid {
    let size = grid.size();
    let mut cells = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            cells.push(grid.get(col, row));
        }
    }
    Grid::from_cells(size, cells)
}
