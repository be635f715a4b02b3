//! Move resolution.
//!
//! Only a move to the left is implemented directly. The other directions
//! rotate the board into that shape with [`reverse`] and [`transpose`],
//! resolve, and rotate back.
//!
//! A row resolves in three passes: slide the tiles to the left, merge
//! adjacent equal pairs scanning left to right, slide again to close the gaps
//! the merges left behind.

use super::grid::{Grid, can_merge};
use super::settings::ScoringMode;
use super::transforms::{reverse, transpose};
use super::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// True iff at least one tile moved or merged.
    pub changed: bool,
    pub score_delta: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowMerges {
    pub changed: bool,
    /// Value produced by the rightmost merge, 0 when nothing merged.
    pub last_merge: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowResolution {
    pub row: Vec<u32>,
    pub changed: bool,
    pub merges: RowMerges,
}

/// Result of resolving a whole board to the left, before a scoring mode picks
/// the delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeftMove {
    pub grid: Grid,
    pub changed: bool,
    /// Last merge seen scanning the board row-major.
    pub last_merge: u32,
    pub merge_total: u64,
}

impl LeftMove {
    fn score_delta(&self, scoring: ScoringMode) -> u64 {
        match scoring {
            ScoringMode::LastMerge => u64::from(self.last_merge),
            ScoringMode::SumOfMerges => self.merge_total,
        }
    }
}

/// Packs the non-empty tiles to the left, keeping their order. The flag is
/// set when any tile ended up in a lower column.
pub fn slide_row(row: &[u32]) -> (Vec<u32>, bool) {
    let mut slid = vec![0; row.len()];
    let mut changed = false;
    let mut next_col = 0;

    for (col, &value) in row.iter().enumerate() {
        if value == 0 {
            continue;
        }
        slid[next_col] = value;
        if next_col != col {
            changed = true;
        }
        next_col += 1;
    }

    (slid, changed)
}

/// Merges adjacent equal tiles in place, left to right.
///
/// Every comparison looks at the row as already modified by earlier merges of
/// the same scan: a merge writes the sum into `j - 1` and clears `j`, so the
/// next pair starts from an empty cell and a tile never merges twice.
pub fn merge_row(row: &mut [u32]) -> RowMerges {
    let mut merges = RowMerges::default();

    for j in 1..row.len() {
        if can_merge(row[j - 1], row[j]) {
            let merged = row[j - 1] + row[j];
            row[j - 1] = merged;
            row[j] = 0;
            merges.changed = true;
            merges.last_merge = merged;
            merges.total += u64::from(merged);
        }
    }

    merges
}

pub fn move_row_left(row: &[u32]) -> RowResolution {
    let (mut slid, changed_before) = slide_row(row);
    let merges = merge_row(&mut slid);
    let (row, changed_after) = slide_row(&slid);

    RowResolution {
        row,
        changed: changed_before || merges.changed || changed_after,
        merges,
    }
}

pub fn move_left(grid: &Grid) -> LeftMove {
    let size = grid.size();
    let mut cells = Vec::with_capacity(size * size);
    let mut changed = false;
    let mut last_merge = 0;
    let mut merge_total = 0;

    for row in grid.rows() {
        let resolution = move_row_left(row);
        changed |= resolution.changed;
        if resolution.merges.changed {
            last_merge = resolution.merges.last_merge;
        }
        merge_total += resolution.merges.total;
        cells.extend(resolution.row);
    }

    LeftMove {
        grid: Grid::from_cells(size, cells),
        changed,
        last_merge,
        merge_total,
    }
}

/// Resolves `direction` scoring with [`ScoringMode::LastMerge`].
pub fn resolve_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    resolve_move_scored(grid, direction, ScoringMode::LastMerge)
}

pub fn resolve_move_scored(grid: &Grid, direction: Direction, scoring: ScoringMode) -> MoveOutcome {
    let (resolved, result) = match direction {
        Direction::Left => {
            let resolved = move_left(grid);
            let result = resolved.grid.clone();
            (resolved, result)
        }
        Direction::Right => {
            let resolved = move_left(&reverse(grid));
            let result = reverse(&resolved.grid);
            (resolved, result)
        }
        Direction::Up => {
            let resolved = move_left(&transpose(grid));
            let result = transpose(&resolved.grid);
            (resolved, result)
        }
        Direction::Down => {
            let resolved = move_left(&reverse(&transpose(grid)));
            let result = transpose(&reverse(&resolved.grid));
            (resolved, result)
        }
    };

    MoveOutcome {
        grid: result,
        changed: resolved.changed,
        score_delta: if resolved.changed {
            resolved.score_delta(scoring)
        } else {
            0
        },
    }
}
