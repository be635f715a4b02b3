use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("grid size should be between 1 and {max}, got {0}", max = super::grid::MAX_SIZE)]
    InvalidSize(i64),
    #[error("target value should be a positive power of two, got {0}")]
    InvalidTarget(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("unrecognized direction '{0}'")]
    InvalidInput(String),
    /// Spawning was requested on a full grid. Callers evaluate the grid first,
    /// so this signals a broken caller rather than a user mistake.
    #[error("no empty cell left to spawn into")]
    NoEmptyCell,
    #[error("a 1x1 game is decided by a single draw and has no session")]
    SingleCellGrid,
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}
