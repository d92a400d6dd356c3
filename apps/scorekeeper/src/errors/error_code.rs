//! Stable error codes surfaced to the UI layer.
//!
//! Add new codes here; never hand ad-hoc strings to a caller. Every code is
//! SCREAMING_SNAKE_CASE so a front end can key its own copy off it.

use core::fmt;

use serde::Serialize;

/// Centralized error codes for the score keeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum ErrorCode {
    // Round validation
    /// Team bids add up to more than the tricks in a deal
    BidsExceedThirteen,
    /// Team tricks do not add up to the tricks in a deal
    TricksDoNotSumToThirteen,

    // Team setup
    /// Team name missing or blank
    EmptyTeamName,
    /// One of the two player names missing or blank
    EmptyPlayerName,
    /// Both teams share an identifier
    DuplicateTeamId,

    // Session lifecycle
    /// Round submitted before teams were confirmed
    GameNotStarted,
    /// Teams confirmed while a game is already running
    GameAlreadyStarted,
    /// Round submitted after the target score was reached
    GameComplete,

    // Restore and configuration
    /// Saved game failed to parse or violates an invariant
    DataCorruption,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BidsExceedThirteen => "BIDS_EXCEED_THIRTEEN",
            Self::TricksDoNotSumToThirteen => "TRICKS_DO_NOT_SUM_TO_THIRTEEN",

            Self::EmptyTeamName => "EMPTY_TEAM_NAME",
            Self::EmptyPlayerName => "EMPTY_PLAYER_NAME",
            Self::DuplicateTeamId => "DUPLICATE_TEAM_ID",

            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameComplete => "GAME_COMPLETE",

            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl From<ErrorCode> for &'static str {
    fn from(code: ErrorCode) -> Self {
        code.as_str()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
