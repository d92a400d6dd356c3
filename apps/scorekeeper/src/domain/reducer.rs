use tracing::{debug, info};

use crate::domain::round::{Round, RoundInput};
use crate::domain::state::GameState;
use crate::domain::validation::{validate, ValidationResult};
use crate::errors::RoundValidationError;

/// Record one round and return the next version of the game.
///
/// All or nothing: a rejected input returns the reason and `state` is left
/// exactly as it was. An accepted input is scored once, appended to the log,
/// and folded into the totals.
///
/// Callers are expected to stop submitting once `state.is_complete()`;
/// [`crate::Session`] enforces that.
pub fn submit_round(
    state: &GameState,
    input: RoundInput,
) -> Result<GameState, RoundValidationError> {
    let round_no = state.next_round_no();
    debug!(round_no, ?input, "Submitting round");

    if let ValidationResult::Rejected(reason) = validate(&input) {
        debug!(round_no, code = %reason.code(), "Round rejected");
        return Err(reason);
    }

    let round = Round::accept(state.next_round_id(), input);
    let [team1_score, team2_score] = round.scores();

    let mut next = state.clone();
    next.push_round(round);

    let [team1_total, team2_total] = next.totals();
    info!(
        round_no,
        team1_score, team2_score, team1_total, team2_total, "Round recorded"
    );

    if next.is_complete() && !state.is_complete() {
        info!(
            round_no,
            winner = ?next.winner(),
            target_score = next.target_score(),
            "Target score reached"
        );
    }

    Ok(next)
}
