use super::error::GameError;
use super::error::ConfigurationError;
use super::grid::{Grid, MAX_SIZE};
use super::settings::FollowUpSpawn;
use super::types::Position;
use crate::games::session_rng::SessionRng;

/// 4 with probability 1/10, otherwise 2.
pub fn initial_tile_value(rng: &mut SessionRng) -> u32 {
    if rng.random_ratio(1, 10) { 4 } else { 2 }
}

/// Builds an empty `size`x`size` grid holding two opening tiles.
pub fn init_game(size: usize, rng: &mut SessionRng) -> Result<Grid, GameError> {
    if size == 0 || size > MAX_SIZE {
        let reported = i64::try_from(size).unwrap_or(i64::MAX);
        return Err(ConfigurationError::InvalidSize(reported).into());
    }
    let mut grid = Grid::empty(size);
    place_initial_tiles(&mut grid, rng)?;
    Ok(grid)
}

/// Places two tiles on distinct empty cells, each with its own weighted value.
/// Leaves the grid untouched when fewer than two cells are free.
pub fn place_initial_tiles(
    grid: &mut Grid,
    rng: &mut SessionRng,
) -> Result<[Position; 2], GameError> {
    if grid.empty_cells().len() < 2 {
        return Err(GameError::NoEmptyCell);
    }
    let first = pick_empty_cell(grid, rng)?;
    grid.set(first.row, first.col, initial_tile_value(rng));
    let second = pick_empty_cell(grid, rng)?;
    grid.set(second.row, second.col, initial_tile_value(rng));
    Ok([first, second])
}

pub fn place_one(
    grid: &mut Grid,
    rng: &mut SessionRng,
    follow_up_spawn: FollowUpSpawn,
) -> Result<Position, GameError> {
    let position = pick_empty_cell(grid, rng)?;
    let value = match follow_up_spawn {
        FollowUpSpawn::AlwaysTwo => 2,
        FollowUpSpawn::Weighted => initial_tile_value(rng),
    };
    grid.set(position.row, position.col, value);
    Ok(position)
}

/// Returns a copy of `grid` with one more `2` tile.
pub fn spawn_one(grid: &Grid, rng: &mut SessionRng) -> Result<Grid, GameError> {
    let mut spawned = grid.clone();
    place_one(&mut spawned, rng, FollowUpSpawn::AlwaysTwo)?;
    Ok(spawned)
}

/// Rejection sampling over the whole board: draw a cell uniformly and retry
/// while it is occupied. Fails up front on a full grid.
fn pick_empty_cell(grid: &Grid, rng: &mut SessionRng) -> Result<Position, GameError> {
    if !grid.has_empty_cell() {
        return Err(GameError::NoEmptyCell);
    }

    let size = grid.size();
    loop {
        let position = Position::new(rng.random_range(0..size), rng.random_range(0..size));
        if grid.is_empty_at(position) {
            return Ok(position);
        }
    }
}
