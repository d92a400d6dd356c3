use crate::domain::round::RoundInput;
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::errors::RoundValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(RoundValidationError),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    pub fn into_result(self) -> Result<(), RoundValidationError> {
        match self {
            ValidationResult::Accepted => Ok(()),
            ValidationResult::Rejected(reason) => Err(reason),
        }
    }
}

/// Check the two cross-team sums of a candidate round.
///
/// Per-field ranges are not checked here; the input boundary clamps them.
/// The bid check runs first, so a round wrong on both counts reports
/// `BidsExceedThirteen`.
pub fn validate(input: &RoundInput) -> ValidationResult {
    let tricks = u16::from(TRICKS_PER_ROUND);
    if input.total_bids() > tricks {
        return ValidationResult::Rejected(RoundValidationError::BidsExceedThirteen);
    }
    if input.total_tricks() != tricks {
        return ValidationResult::Rejected(RoundValidationError::TricksDoNotSumToThirteen);
    }
    ValidationResult::Accepted
}
