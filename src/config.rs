use std::fs;
use std::path::Path;
use std::str::FromStr;

use schema::{BattleMode, Criterion};
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};

/// Lives bounds and opponent count for a battle tower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    pub min_lives: u32,
    pub max_lives: u32,
    /// Number of opponents generated when the tower is set up.
    pub opponents: usize,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            min_lives: 1,
            max_lives: 3,
            opponents: 3,
        }
    }
}

impl LadderConfig {
    /// Parse a RON document. Missing fields fall back to their defaults.
    pub fn from_ron_str(text: &str) -> ConfigResult<Self> {
        let config: LadderConfig =
            ron::from_str(text).map_err(|err| ConfigError::InvalidLadder(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(format!("{}: {}", path.display(), err)))?;
        Self::from_ron_str(&content)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_lives == 0 {
            return Err(ConfigError::InvalidLadder(
                "min_lives must be at least 1".to_string(),
            ));
        }
        if self.min_lives > self.max_lives {
            return Err(ConfigError::InvalidLadder(format!(
                "min_lives {} exceeds max_lives {}",
                self.min_lives, self.max_lives
            )));
        }
        Ok(())
    }
}

/// Parse a battle mode from its name ("set", "rotate", "optimise") or its value (0-2).
pub fn parse_mode(value: &str) -> ConfigResult<BattleMode> {
    let trimmed = value.trim();
    if let Ok(number) = trimmed.parse::<u8>() {
        return BattleMode::from_value(number)
            .ok_or_else(|| ConfigError::InvalidMode(value.to_string()));
    }
    BattleMode::from_str(trimmed).map_err(|_| ConfigError::InvalidMode(value.to_string()))
}

/// Parse an Optimise criterion from its snake_case name.
pub fn parse_criterion(value: &str) -> ConfigResult<Criterion> {
    Criterion::from_str(value.trim()).map_err(|_| ConfigError::InvalidCriterion(value.to_string()))
}
