use serde::{Deserialize, Serialize};

use crate::config::game::GameConfig;
use crate::domain::round::{Round, RoundId};
use crate::domain::rules::{DEFAULT_TARGET_SCORE, TEAMS};
use crate::domain::scoring::score;
use crate::domain::teams::{ensure_distinct_ids, Team, TeamSlot};
use crate::domain::validation::validate;
use crate::errors::DomainError;

/// Where a game stands after the latest round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    /// Some team reached the target. `winner` is `None` only for a tie at or
    /// above the target.
    Complete { winner: Option<TeamSlot> },
}

/// One version of a game: teams, the round log, and running totals.
///
/// Values are never edited in place by the public API; the reducer returns a
/// new version for every accepted round. Totals are always the per-team sum of
/// the round log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct GameState {
    teams: [Team; TEAMS],
    rounds: Vec<Round>,
    totals: [i32; TEAMS],
    target_score: i32,
    next_round_id: u32,
}

impl GameState {
    /// Empty game for two confirmed teams.
    pub fn new(teams: [Team; TEAMS], config: &GameConfig) -> Self {
        Self {
            teams,
            rounds: Vec::new(),
            totals: [0; TEAMS],
            target_score: config.target_score,
            next_round_id: 1,
        }
    }

    pub fn teams(&self) -> &[Team; TEAMS] {
        &self.teams
    }

    pub fn team(&self, slot: TeamSlot) -> &Team {
        &self.teams[slot.index()]
    }

    /// Rounds in play order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn totals(&self) -> [i32; TEAMS] {
        self.totals
    }

    pub fn total(&self, slot: TeamSlot) -> i32 {
        self.totals[slot.index()]
    }

    pub fn target_score(&self) -> i32 {
        self.target_score
    }

    /// 1-based number of the round about to be played.
    pub fn next_round_no(&self) -> usize {
        self.rounds.len() + 1
    }

    pub fn is_complete(&self) -> bool {
        self.totals.iter().any(|&t| t >= self.target_score)
    }

    /// A team wins once it is at or over the target and strictly ahead.
    pub fn winner(&self) -> Option<TeamSlot> {
        TeamSlot::ALL.into_iter().find(|&slot| {
            let own = self.total(slot);
            own >= self.target_score && own > self.total(slot.other())
        })
    }

    /// The team strictly ahead on points, if any.
    pub fn leader(&self) -> Option<TeamSlot> {
        let [t1, t2] = self.totals;
        match t1.cmp(&t2) {
            std::cmp::Ordering::Greater => Some(TeamSlot::Team1),
            std::cmp::Ordering::Less => Some(TeamSlot::Team2),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.is_complete() {
            GameStatus::Complete {
                winner: self.winner(),
            }
        } else {
            GameStatus::InProgress
        }
    }

    pub(crate) fn next_round_id(&self) -> RoundId {
        RoundId(self.next_round_id)
    }

    /// Append an accepted round and fold its scores into the totals.
    pub(crate) fn push_round(&mut self, round: Round) {
        for slot in TeamSlot::ALL {
            self.totals[slot.index()] += round.score(slot);
        }
        self.next_round_id = round.id().0.saturating_add(1);
        self.rounds.push(round);
    }
}

/// Per-team sum of a round log.
pub fn sum_totals(rounds: &[Round]) -> [i32; TEAMS] {
    rounds.iter().fold([0; TEAMS], |mut acc, round| {
        for slot in TeamSlot::ALL {
            acc[slot.index()] += round.score(slot);
        }
        acc
    })
}

/// Saved form of a game: teams, ordered rounds, and the target.
/// Totals are derived on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub teams: [Team; TEAMS],
    pub rounds: Vec<Round>,
    #[serde(default = "default_target_score")]
    pub target_score: i32,
}

fn default_target_score() -> i32 {
    DEFAULT_TARGET_SCORE
}

impl From<GameState> for GameRecord {
    fn from(state: GameState) -> Self {
        Self {
            teams: state.teams,
            rounds: state.rounds,
            target_score: state.target_score,
        }
    }
}

impl TryFrom<GameRecord> for GameState {
    type Error = DomainError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let [first, second] = &record.teams;
        ensure_distinct_ids(first, second).map_err(|e| DomainError::corrupt(e.to_string()))?;
        let config = GameConfig::with_target_score(record.target_score)
            .map_err(|e| DomainError::corrupt(e.to_string()))?;

        let mut state = GameState::new(record.teams, &config);
        for round in record.rounds {
            if state.is_complete() {
                return Err(DomainError::corrupt(format!(
                    "round {} recorded after the game was complete",
                    round.id()
                )));
            }
            check_round(&round, state.next_round_id())?;
            state.push_round(round);
        }
        Ok(state)
    }
}

/// Round ids in a saved log must run 1, 2, 3 … in play order.
fn check_round(round: &Round, expected: RoundId) -> Result<(), DomainError> {
    let id = round.id();
    if id != expected {
        return Err(DomainError::corrupt(format!(
            "round {id} found where round {expected} was expected"
        )));
    }
    // Any field above 13 also breaks one of the two sums.
    validate(round.input())
        .into_result()
        .map_err(|reason| DomainError::corrupt(format!("round {id}: {reason}")))?;
    for slot in TeamSlot::ALL {
        let expected = score(round.bid(slot), round.tricks(slot));
        if round.score(slot) != expected {
            return Err(DomainError::corrupt(format!(
                "round {id} stores {} for {slot:?}, expected {expected}",
                round.score(slot)
            )));
        }
    }
    Ok(())
}

impl GameState {
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| DomainError::corrupt(e.to_string()))
    }

    /// Restore a saved game, re-checking every round and rebuilding totals.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::corrupt(e.to_string()))
    }
}
