pub mod config;
pub mod games;
pub mod logger;
pub mod version;

pub use games::puzzle2048::{
    Direction, GameError, GameSession, GameSettings, GameState, Grid, MoveOutcome,
};
pub use games::SessionRng;
