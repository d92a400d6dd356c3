//! Game configuration.
//!
//! The only knob is the score that ends a game. It defaults to 500 and can be
//! overridden with the `SPADES_TARGET_SCORE` environment variable.

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::DEFAULT_TARGET_SCORE;
use crate::errors::DomainError;

pub const TARGET_SCORE_ENV: &str = "SPADES_TARGET_SCORE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// First team to reach this total (and lead) wins.
    pub target_score: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl GameConfig {
    pub fn with_target_score(target_score: i32) -> Result<Self, DomainError> {
        if target_score <= 0 {
            return Err(DomainError::config(format!(
                "target score must be positive, got {target_score}"
            )));
        }
        Ok(Self { target_score })
    }

    /// Load from `SPADES_TARGET_SCORE`.
    ///
    /// Unset or blank falls back to the default; anything else must parse as a
    /// positive integer.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_raw(env::var(TARGET_SCORE_ENV).ok().as_deref())
    }

    fn from_raw(raw: Option<&str>) -> Result<Self, DomainError> {
        let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };
        let target_score = trimmed.parse::<i32>().map_err(|e| {
            DomainError::config(format!("{TARGET_SCORE_ENV}={trimmed:?} is not a number: {e}"))
        })?;
        Self::with_target_score(target_score)
    }
}
