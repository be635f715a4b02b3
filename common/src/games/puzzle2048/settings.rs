use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use super::grid::{MAX_SIZE, MAX_TILE};

/// How the merges of one move turn into a score delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Only the value of the last merge found scanning the board row-major
    /// counts. Matches the classic terminal version of the game.
    #[default]
    LastMerge,
    /// Every merge of the move counts.
    SumOfMerges,
}

/// Value of the tile spawned after each successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpSpawn {
    #[default]
    AlwaysTwo,
    /// Same 90/10 split between 2 and 4 as the opening tiles.
    Weighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    size: usize,
    target_value: u32,
    scoring: ScoringMode,
    follow_up_spawn: FollowUpSpawn,
}

impl GameSettings {
    /// Takes signed values so that anything a user typed can be rejected with
    /// a proper error instead of failing to parse.
    pub fn new(size: i64, target_value: i64) -> Result<Self, ConfigurationError> {
        let size = validate_size(size)?;
        let target_value = validate_target(target_value)?;
        Ok(Self {
            size,
            target_value,
            scoring: ScoringMode::default(),
            follow_up_spawn: FollowUpSpawn::default(),
        })
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_follow_up_spawn(mut self, follow_up_spawn: FollowUpSpawn) -> Self {
        self.follow_up_spawn = follow_up_spawn;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn target_value(&self) -> u32 {
        self.target_value
    }

    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    pub fn follow_up_spawn(&self) -> FollowUpSpawn {
        self.follow_up_spawn
    }

    pub fn is_single_cell(&self) -> bool {
        self.size == 1
    }
}

fn validate_size(size: i64) -> Result<usize, ConfigurationError> {
    match usize::try_from(size) {
        Ok(s) if (1..=MAX_SIZE).contains(&s) => Ok(s),
        _ => Err(ConfigurationError::InvalidSize(size)),
    }
}

fn validate_target(target_value: i64) -> Result<u32, ConfigurationError> {
    match u32::try_from(target_value) {
        Ok(t) if t.is_power_of_two() && t <= MAX_TILE => Ok(t),
        _ => Err(ConfigurationError::InvalidTarget(target_value)),
    }
}
