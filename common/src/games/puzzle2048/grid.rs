use std::fmt;

use super::error::GameError;
use super::types::Position;

/// Largest tile a `u32` cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Largest accepted board side.
pub const MAX_SIZE: usize = 1024;

/// Square board of tiles stored row-major. `0` is an empty cell, every other
/// value is a power of two.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<u32>,
    size: usize,
}

impl Grid {
    pub(crate) fn empty(size: usize) -> Self {
        debug_assert!(size <= MAX_SIZE);
        Self {
            cells: vec![0; size * size],
            size,
        }
    }

    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::InvalidGrid("grid has no rows".to_string()));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GameError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    index,
                    row.len(),
                    size
                )));
            }
            if let Some(bad) = row.iter().find(|&&v| v != 0 && !v.is_power_of_two()) {
                return Err(GameError::InvalidGrid(format!(
                    "row {} holds {}, which is not a power of two",
                    index, bad
                )));
            }
            cells.extend(row);
        }

        Ok(Self { cells, size })
    }

    pub(crate) fn from_cells(size: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { cells, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.size + col] = value;
    }

    pub fn row(&self, row: usize) -> &[u32] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks(0) panics; a zero-sized grid simply has no rows.
        self.cells.chunks(self.size.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position.row, position.col) == 0
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&0)
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

/// True when `a` and `b` are equal tiles whose sum still fits in a cell.
pub(crate) fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.highest_tile().max(1).to_string().len();
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".", width = width)
                    } else {
                        format!("{:>width$}", v, width = width)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_has_no_tiles() {
        let grid = Grid::empty(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.tile_count(), 0);
        assert_eq!(grid.empty_cells().len(), 16);
    }

    #[test]
    fn test_from_rows_addresses_row_major() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 8]]).unwrap();
        assert_eq!(grid.get(0, 0), 2);
        assert_eq!(grid.get(1, 1), 8);
        assert_eq!(grid.row(1), &[0, 8]);
        assert_eq!(grid.to_rows(), vec![vec![2, 0], vec![0, 8]]);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let result = Grid::from_rows(vec![vec![2, 0, 0], vec![0, 8, 0]]);
        assert!(matches!(result, Err(GameError::InvalidGrid(_))));
    }

    #[test]
    fn test_from_rows_rejects_non_power_of_two() {
        let result = Grid::from_rows(vec![vec![3, 0], vec![0, 0]]);
        assert!(matches!(result, Err(GameError::InvalidGrid(_))));
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(Grid::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_empty_cells_and_stats() {
        let grid = Grid::from_rows(vec![vec![2, 4], vec![0, 16]]).unwrap();
        assert!(grid.has_empty_cell());
        assert_eq!(grid.empty_cells(), vec![Position::new(1, 0)]);
        assert!(grid.is_empty_at(Position::new(1, 0)));
        assert_eq!(grid.tile_count(), 3);
        assert_eq!(grid.tile_sum(), 22);
        assert_eq!(grid.highest_tile(), 16);
    }

    #[test]
    fn test_can_merge_respects_ceiling() {
        assert!(can_merge(2, 2));
        assert!(!can_merge(0, 0));
        assert!(!can_merge(2, 4));
        assert!(!can_merge(MAX_TILE, MAX_TILE));
    }

    #[test]
    fn test_display_aligns_columns() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![128, 4]]).unwrap();
        assert_eq!(grid.to_string(), "  2   .\n128   4\n");
    }
}
