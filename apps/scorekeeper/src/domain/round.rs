use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::clamp_field;
use crate::domain::scoring::{bid_outcome, score, BidOutcome};
use crate::domain::teams::TeamSlot;

/// Bids and tricks for one deal, as entered. Not yet validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundInput {
    pub team1_bid: u8,
    pub team1_tricks: u8,
    pub team2_bid: u8,
    pub team2_tricks: u8,
}

impl RoundInput {
    pub const fn new(team1_bid: u8, team1_tricks: u8, team2_bid: u8, team2_tricks: u8) -> Self {
        Self {
            team1_bid,
            team1_tricks,
            team2_bid,
            team2_tricks,
        }
    }

    /// Build from raw form text, ordered `[team1 bid, team1 tricks, team2 bid, team2 tricks]`.
    /// Each field goes through [`clamp_field`].
    pub fn from_form(fields: [&str; 4]) -> Self {
        let [t1b, t1t, t2b, t2t] = fields.map(clamp_field);
        Self::new(t1b, t1t, t2b, t2t)
    }

    pub const fn bid(&self, slot: TeamSlot) -> u8 {
        match slot {
            TeamSlot::Team1 => self.team1_bid,
            TeamSlot::Team2 => self.team2_bid,
        }
    }

    pub const fn tricks(&self, slot: TeamSlot) -> u8 {
        match slot {
            TeamSlot::Team1 => self.team1_tricks,
            TeamSlot::Team2 => self.team2_tricks,
        }
    }

    pub fn total_bids(&self) -> u16 {
        u16::from(self.team1_bid) + u16::from(self.team2_bid)
    }

    pub fn total_tricks(&self) -> u16 {
        u16::from(self.team1_tricks) + u16::from(self.team2_tricks)
    }
}

/// Per-game round identifier. Only used to tell rounds apart in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(pub u32);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An accepted round. Scores are fixed when the round is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    id: RoundId,
    #[serde(flatten)]
    input: RoundInput,
    team1_score: i32,
    team2_score: i32,
}

impl Round {
    /// Score an already-validated input.
    pub(crate) fn accept(id: RoundId, input: RoundInput) -> Self {
        Self {
            id,
            team1_score: score(input.team1_bid, input.team1_tricks),
            team2_score: score(input.team2_bid, input.team2_tricks),
            input,
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn input(&self) -> &RoundInput {
        &self.input
    }

    pub fn bid(&self, slot: TeamSlot) -> u8 {
        self.input.bid(slot)
    }

    pub fn tricks(&self, slot: TeamSlot) -> u8 {
        self.input.tricks(slot)
    }

    pub fn score(&self, slot: TeamSlot) -> i32 {
        match slot {
            TeamSlot::Team1 => self.team1_score,
            TeamSlot::Team2 => self.team2_score,
        }
    }

    pub fn scores(&self) -> [i32; 2] {
        [self.team1_score, self.team2_score]
    }

    pub fn outcome(&self, slot: TeamSlot) -> BidOutcome {
        bid_outcome(self.bid(slot), self.tricks(slot))
    }

    /// Both teams' points for this round added together.
    pub fn combined_score(&self) -> i32 {
        self.team1_score + self.team2_score
    }
}
