use std::ops::RangeInclusive;

pub const TEAMS: usize = 2;
pub const PLAYERS_PER_TEAM: usize = 2;
/// Tricks in one deal; also the largest legal bid.
pub const TRICKS_PER_ROUND: u8 = 13;
pub const POINTS_PER_BID: i32 = 10;
pub const DEFAULT_TARGET_SCORE: i32 = 500;
/// Rounds shown on each team's score card.
pub const RECENT_ROUNDS: usize = 3;

/// Legal range for any single bid or trick count.
pub fn valid_field_range() -> RangeInclusive<u8> {
    0..=TRICKS_PER_ROUND
}

/// Clamp a numeric form value into [`valid_field_range`].
pub fn clamp_value(value: i64) -> u8 {
    let range = valid_field_range();
    value.clamp(i64::from(*range.start()), i64::from(*range.end())) as u8
}

/// Turn raw form text into a field value.
///
/// Leading whitespace and a sign are accepted, then the leading run of digits
/// is read; trailing junk is ignored. No digits at all reads as 0. The result
/// is clamped into `0..=13`.
pub fn clamp_field(raw: &str) -> u8 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || negative {
        return 0;
    }
    // Overflowing digit runs are far above the range anyway.
    rest[..digits]
        .parse::<i64>()
        .map_or(TRICKS_PER_ROUND, clamp_value)
}
