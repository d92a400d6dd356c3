//! Domain-level error types.
//!
//! Nothing here is fatal. Round and setup errors are meant to be shown to the
//! person at the table so they can fix the entry and try again; the game state
//! they were applied against is never modified.

use thiserror::Error;

use crate::errors::ErrorCode;

/// Why a candidate round was refused.
///
/// When both sums are wrong the bid problem is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundValidationError {
    #[error("total bids cannot exceed 13 tricks")]
    BidsExceedThirteen,
    #[error("total tricks must equal 13")]
    TricksDoNotSumToThirteen,
}

impl RoundValidationError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::BidsExceedThirteen => ErrorCode::BidsExceedThirteen,
            Self::TricksDoNotSumToThirteen => ErrorCode::TricksDoNotSumToThirteen,
        }
    }
}

/// Problems with the two teams entered before a game starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("team {team_id} needs a name")]
    EmptyTeamName { team_id: String },
    #[error("team {team_id} is missing player {}", .seat + 1)]
    EmptyPlayerName { team_id: String, seat: usize },
    #[error("both teams use the id {0}")]
    DuplicateTeamId(String),
}

impl SetupError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyTeamName { .. } => ErrorCode::EmptyTeamName,
            Self::EmptyPlayerName { .. } => ErrorCode::EmptyPlayerName,
            Self::DuplicateTeamId(_) => ErrorCode::DuplicateTeamId,
        }
    }
}

/// Errors raised by [`crate::Session`] while driving a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no game in progress; confirm teams first")]
    NotStarted,
    #[error("a game is already in progress")]
    AlreadyStarted,
    #[error("game is complete; start a new game")]
    GameComplete,
    #[error(transparent)]
    Round(#[from] RoundValidationError),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

impl SessionError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotStarted => ErrorCode::GameNotStarted,
            Self::AlreadyStarted => ErrorCode::GameAlreadyStarted,
            Self::GameComplete => ErrorCode::GameComplete,
            Self::Round(e) => e.code(),
            Self::Setup(e) => e.code(),
        }
    }
}

/// Failures outside normal play: restoring a saved game or reading config.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("corrupt game record: {0}")]
    CorruptRecord(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn corrupt(detail: impl Into<String>) -> Self {
        Self::CorruptRecord(detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::CorruptRecord(_) => ErrorCode::DataCorruption,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }
}
