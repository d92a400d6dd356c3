//! Shared helpers for integration tests: logging setup and unique names.
//!
//! Unique names come from ULIDs so parallel tests never build two teams that
//! look alike by accident.

pub mod logging;

use ulid::Ulid;

/// Generate a unique string with the given prefix.
///
/// ```
/// use test_support::unique_str;
///
/// let a = unique_str("team");
/// let b = unique_str("team");
/// assert_ne!(a, b);
/// assert!(a.starts_with("team-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Two distinct player names for one team, sharing a prefix.
pub fn unique_players(prefix: &str) -> [String; 2] {
    [unique_str(prefix), unique_str(prefix)]
}
