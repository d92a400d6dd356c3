// Proptest generators for round inputs.
// Legal inputs are built by construction rather than filtered.

use proptest::prelude::*;

use crate::domain::round::RoundInput;
use crate::domain::rules::TRICKS_PER_ROUND;

/// Any single field value in 0..=13.
pub fn field() -> impl Strategy<Value = u8> {
    0u8..=TRICKS_PER_ROUND
}

/// Four independent fields; may or may not be a legal round.
pub fn any_round_input() -> impl Strategy<Value = RoundInput> {
    (field(), field(), field(), field())
        .prop_map(|(t1b, t1t, t2b, t2t)| RoundInput::new(t1b, t1t, t2b, t2t))
}

/// A round that passes validation: bids sum to at most 13, tricks to exactly 13.
pub fn legal_round_input() -> impl Strategy<Value = RoundInput> {
    (field(), field())
        .prop_flat_map(|(team1_bid, team1_tricks)| {
            (
                Just(team1_bid),
                Just(team1_tricks),
                0u8..=(TRICKS_PER_ROUND - team1_bid),
            )
        })
        .prop_map(|(team1_bid, team1_tricks, team2_bid)| {
            RoundInput::new(
                team1_bid,
                team1_tricks,
                team2_bid,
                TRICKS_PER_ROUND - team1_tricks,
            )
        })
}

/// A sequence of legal rounds.
pub fn legal_rounds(max: usize) -> impl Strategy<Value = Vec<RoundInput>> {
    prop::collection::vec(legal_round_input(), 0..=max)
}
