//! Property tests for the scoring rule and round validation.

use proptest::prelude::*;

use crate::domain::round::RoundInput;
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::scoring::score;
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::validation::{validate, ValidationResult};
use crate::errors::RoundValidationError;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Made bids: ten per bid plus one per overtrick, never negative.
    #[test]
    fn prop_made_bid_formula(
        (bid, tricks) in (0u8..=13).prop_flat_map(|b| (Just(b), b..=13u8)),
    ) {
        let s = score(bid, tricks);
        prop_assert_eq!(s, 10 * i32::from(bid) + i32::from(tricks - bid));
        prop_assert!(s >= 0);
    }

    /// Failed bids: minus ten per bid, never positive.
    #[test]
    fn prop_failed_bid_formula(
        (bid, tricks) in (1u8..=13).prop_flat_map(|b| (Just(b), 0..b)),
    ) {
        let s = score(bid, tricks);
        prop_assert_eq!(s, -10 * i32::from(bid));
        prop_assert!(s <= 0);
    }

    /// Rejected iff one of the sums is wrong; the bid problem wins ties.
    #[test]
    fn prop_validate_matches_sum_rules(input in test_gens::any_round_input()) {
        let limit = u16::from(TRICKS_PER_ROUND);
        let bids_bad = input.total_bids() > limit;
        let tricks_bad = input.total_tricks() != limit;

        let expected = if bids_bad {
            ValidationResult::Rejected(RoundValidationError::BidsExceedThirteen)
        } else if tricks_bad {
            ValidationResult::Rejected(RoundValidationError::TricksDoNotSumToThirteen)
        } else {
            ValidationResult::Accepted
        };
        prop_assert_eq!(validate(&input), expected);
    }

    /// Generated legal rounds really are legal.
    #[test]
    fn prop_legal_generator_is_accepted(input in test_gens::legal_round_input()) {
        prop_assert!(validate(&input).is_accepted());
    }

    /// Swapping the teams never changes the verdict.
    #[test]
    fn prop_validate_is_symmetric(input in test_gens::any_round_input()) {
        let swapped = RoundInput::new(
            input.team2_bid,
            input.team2_tricks,
            input.team1_bid,
            input.team1_tricks,
        );
        prop_assert_eq!(validate(&input), validate(&swapped));
    }
}
