//! One table's game lifecycle: Setup → InProgress → Complete.
//!
//! The session keeps the current `GameState` behind an `Arc`. Every accepted
//! round swaps in a new `Arc`; a rejected one leaves the same pointer in
//! place, so a UI can compare versions cheaply with `Arc::ptr_eq`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::game::GameConfig;
use crate::domain::reducer::submit_round;
use crate::domain::round::RoundInput;
use crate::domain::snapshot::Scoreboard;
use crate::domain::state::GameState;
use crate::domain::teams::{confirm_teams, TeamDraft};
use crate::errors::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Teams not yet confirmed.
    Setup,
    /// Rounds are being recorded.
    InProgress,
    /// Target reached; only a new game is allowed.
    Complete,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: GameConfig,
    game: Option<Arc<GameState>>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self { config, game: None }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        match &self.game {
            None => Phase::Setup,
            Some(game) if game.is_complete() => Phase::Complete,
            Some(_) => Phase::InProgress,
        }
    }

    pub fn game(&self) -> Option<&Arc<GameState>> {
        self.game.as_ref()
    }

    /// Confirm teams and start an empty game.
    pub fn start(&mut self, drafts: [TeamDraft; 2]) -> Result<&Arc<GameState>, SessionError> {
        if self.game.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        let teams = confirm_teams(drafts)?;
        info!(
            team1 = teams[0].name(),
            team2 = teams[1].name(),
            target_score = self.config.target_score,
            "Game started"
        );
        let game = GameState::new(teams, &self.config);
        Ok(&*self.game.insert(Arc::new(game)))
    }

    /// Resume a previously saved game.
    pub fn resume(&mut self, game: GameState) -> Result<&Arc<GameState>, SessionError> {
        if self.game.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        Ok(&*self.game.insert(Arc::new(game)))
    }

    /// Record a round. On any error the current version is kept.
    pub fn submit_round(&mut self, input: RoundInput) -> Result<&Arc<GameState>, SessionError> {
        let current = self.game.as_ref().ok_or(SessionError::NotStarted)?;
        if current.is_complete() {
            warn!("Round submitted after game completion");
            return Err(SessionError::GameComplete);
        }
        let next = submit_round(current, input)?;
        Ok(&*self.game.insert(Arc::new(next)))
    }

    /// Drop the current game and return to setup.
    pub fn new_game(&mut self) {
        if let Some(game) = self.game.take() {
            info!(rounds = game.rounds().len(), "Game discarded");
        }
    }

    pub fn scoreboard(&self) -> Option<Scoreboard> {
        self.game.as_deref().map(Scoreboard::from_state)
    }
}
