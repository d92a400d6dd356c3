//! Domain layer: pure scoring, validation and game-state logic.

pub mod reducer;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod teams;
pub mod validation;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use round::{Round, RoundId, RoundInput};
pub use rules::{clamp_field, TRICKS_PER_ROUND};
pub use state::{sum_totals, GameState, GameStatus};
pub use teams::{Team, TeamSlot};
