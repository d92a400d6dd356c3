//! Read model for rendering a game: score cards, history and status.

use serde::{Deserialize, Serialize};

use crate::domain::round::{Round, RoundId};
use crate::domain::rules::RECENT_ROUNDS;
use crate::domain::scoring::BidOutcome;
use crate::domain::state::{GameState, GameStatus};
use crate::domain::teams::{TeamId, TeamSlot};

/// One team's line for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoundLine {
    pub bid: u8,
    pub tricks: u8,
    pub score: i32,
    pub outcome: BidOutcome,
}

impl TeamRoundLine {
    fn from_round(round: &Round, slot: TeamSlot) -> Self {
        Self {
            bid: round.bid(slot),
            tricks: round.tricks(slot),
            score: round.score(slot),
            outcome: round.outcome(slot),
        }
    }
}

/// A recent round as shown on a team's card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRound {
    pub round_no: usize,
    pub id: RoundId,
    #[serde(flatten)]
    pub line: TeamRoundLine,
}

/// Per-team score card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCard {
    pub slot: TeamSlot,
    pub id: TeamId,
    pub name: String,
    pub players: [String; 2],
    pub total: i32,
    /// Strictly ahead of the other team.
    pub leading: bool,
    /// Newest first.
    pub recent: Vec<RecentRound>,
}

/// A row of the full game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub round_no: usize,
    pub id: RoundId,
    pub team1: TeamRoundLine,
    pub team2: TeamRoundLine,
    /// Sum of both teams' round scores.
    pub combined: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Number of the round about to be played.
    pub round_no: usize,
    pub target_score: i32,
    pub cards: [TeamCard; 2],
    /// Oldest first.
    pub history: Vec<HistoryEntry>,
    pub status: GameStatus,
}

impl Scoreboard {
    pub fn from_state(state: &GameState) -> Self {
        let leader = state.leader();
        let cards = TeamSlot::ALL.map(|slot| team_card(state, slot, leader == Some(slot)));
        let history = state
            .rounds()
            .iter()
            .enumerate()
            .map(|(i, round)| HistoryEntry {
                round_no: i + 1,
                id: round.id(),
                team1: TeamRoundLine::from_round(round, TeamSlot::Team1),
                team2: TeamRoundLine::from_round(round, TeamSlot::Team2),
                combined: round.combined_score(),
            })
            .collect();

        Self {
            round_no: state.next_round_no(),
            target_score: state.target_score(),
            cards,
            history,
            status: state.status(),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, GameStatus::Complete { .. })
    }

    pub fn winner(&self) -> Option<&TeamCard> {
        match self.status {
            GameStatus::Complete {
                winner: Some(slot),
            } => Some(&self.cards[slot.index()]),
            _ => None,
        }
    }
}

fn team_card(state: &GameState, slot: TeamSlot, leading: bool) -> TeamCard {
    let team = state.team(slot);
    let rounds = state.rounds();
    let recent = rounds
        .iter()
        .enumerate()
        .rev()
        .take(RECENT_ROUNDS)
        .map(|(i, round)| RecentRound {
            round_no: i + 1,
            id: round.id(),
            line: TeamRoundLine::from_round(round, slot),
        })
        .collect();

    TeamCard {
        slot,
        id: team.id().clone(),
        name: team.name().to_owned(),
        players: team.players().clone(),
        total: state.total(slot),
        leading,
        recent,
    }
}
