mod error;
mod evaluator;
mod grid;
mod instant;
mod launcher;
mod resolver;
mod session;
mod settings;
mod spawner;
mod transforms;
mod types;

pub use error::{ConfigurationError, GameError};
pub use evaluator::{GameState, evaluate};
pub use grid::{Grid, MAX_SIZE, MAX_TILE};
pub use instant::{InstantOutcome, decide};
pub use launcher::{GameLaunch, GameLauncher};
pub use resolver::{
    LeftMove, MoveOutcome, RowMerges, RowResolution, merge_row, move_left, move_row_left, resolve_move,
    resolve_move_scored, slide_row,
};
pub use session::{GameSession, MoveReport};
pub use settings::{FollowUpSpawn, GameSettings, ScoringMode};
pub use spawner::{init_game, initial_tile_value, place_initial_tiles, place_one, spawn_one};
pub use transforms::{reverse, transpose};
pub use types::{Direction, Position};
