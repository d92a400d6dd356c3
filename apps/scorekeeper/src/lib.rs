#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;


// Re-exports for public API
pub use config::game::GameConfig;
pub use domain::reducer::submit_round;
pub use domain::round::{Round, RoundId, RoundInput};
pub use domain::scoring::{bid_outcome, score, BidOutcome};
pub use domain::session::{Phase, Session};
pub use domain::snapshot::Scoreboard;
pub use domain::state::{GameState, GameStatus};
pub use domain::teams::{confirm_teams, Team, TeamDraft, TeamId, TeamSlot};
pub use domain::validation::{validate, ValidationResult};
pub use errors::{DomainError, ErrorCode, RoundValidationError, SessionError, SetupError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
