use serde::{Deserialize, Serialize};
use tile_merge_common::config::Validate;
use tile_merge_common::games::puzzle2048::{
    ConfigurationError, FollowUpSpawn, GameSettings, ScoringMode,
};

/// Startup configuration stored as YAML. Missing keys take their defaults.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub size: i64,
    pub target_value: i64,
    pub scoring: ScoringMode,
    pub follow_up_spawn: FollowUpSpawn,
    pub seed: Option<u64>,
}

impl ClientConfig {
    pub fn to_settings(&self) -> Result<GameSettings, ConfigurationError> {
        Ok(GameSettings::new(self.size, self.target_value)?
            .with_scoring(self.scoring)
            .with_follow_up_spawn(self.follow_up_spawn))
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_settings().map(|_| ()).map_err(|e| e.to_string())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            size: 4,
            target_value: 2048,
            scoring: ScoringMode::LastMerge,
            follow_up_spawn: FollowUpSpawn::AlwaysTwo,
            seed: None,
        }
    }
}
