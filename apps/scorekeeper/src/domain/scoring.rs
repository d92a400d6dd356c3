use serde::{Deserialize, Serialize};

use crate::domain::rules::POINTS_PER_BID;

/// Whether a team took at least as many tricks as it bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidOutcome {
    Made,
    Failed,
}

pub fn bid_outcome(bid: u8, tricks: u8) -> BidOutcome {
    if tricks >= bid {
        BidOutcome::Made
    } else {
        BidOutcome::Failed
    }
}

/// Points one team earns for a deal.
///
/// A made bid is worth ten per trick bid plus one per overtrick; a failed bid
/// costs ten per trick bid. A zero bid can never fail. Defined for every
/// `u8` pair, not just the legal `0..=13` range.
pub fn score(bid: u8, tricks: u8) -> i32 {
    let bid_points = i32::from(bid) * POINTS_PER_BID;
    match bid_outcome(bid, tricks) {
        BidOutcome::Made => bid_points + i32::from(tricks - bid),
        BidOutcome::Failed => -bid_points,
    }
}
