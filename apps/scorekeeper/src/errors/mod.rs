//! Error handling for the score keeper.

pub mod domain;
pub mod error_code;


pub use domain::{DomainError, RoundValidationError, SessionError, SetupError};
pub use error_code::ErrorCode;
