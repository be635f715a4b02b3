use super::grid::{Grid, can_merge};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Continue,
    Win,
    Lose,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Continue)
    }
}

/// Classifies `grid` against `target`.
///
/// Cells are scanned row-major and the first cell holding the target wins
/// immediately. Otherwise the game continues if any cell is empty or can
/// merge with its neighbour below or to the right; if none can, it is lost.
pub fn evaluate(grid: &Grid, target: u32) -> GameState {
    let size = grid.size();
    let mut can_continue = false;

    for row in 0..size {
        for col in 0..size {
            let value = grid.get(row, col);
            if value == target {
                return GameState::Win;
            }
            if can_continue {
                continue;
            }
            if value == 0
                || (row + 1 < size && can_merge(value, grid.get(row + 1, col)))
                || (col + 1 < size && can_merge(value, grid.get(row, col + 1)))
            {
                can_continue = true;
            }
        }
    }

    if can_continue {
        GameState::Continue
    } else {
        GameState::Lose
    }
}
