//! Team setup.
//!
//! A [`TeamDraft`] is whatever the setup form currently holds. It becomes a
//! [`Team`] only through [`confirm_teams`] (or deserialization, which runs the
//! same checks), so a `GameState` can never hold a half-named team.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS_PER_TEAM;
use crate::errors::SetupError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of the two teams, in seating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSlot {
    Team1,
    Team2,
}

impl TeamSlot {
    pub const ALL: [TeamSlot; 2] = [TeamSlot::Team1, TeamSlot::Team2];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TeamSlot::Team1 => 0,
            TeamSlot::Team2 => 1,
        }
    }

    #[inline]
    pub const fn other(self) -> TeamSlot {
        match self {
            TeamSlot::Team1 => TeamSlot::Team2,
            TeamSlot::Team2 => TeamSlot::Team1,
        }
    }
}

/// Unvalidated team entry from the setup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDraft {
    pub id: String,
    pub name: String,
    pub players: [String; PLAYERS_PER_TEAM],
}

impl TeamDraft {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        players: [&str; PLAYERS_PER_TEAM],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            players: players.map(str::to_owned),
        }
    }

    /// The form's starting values: "Team 1"/"Team 2" with empty player names.
    pub fn blank_pair() -> [TeamDraft; 2] {
        [
            TeamDraft::new("1", "Team 1", ["", ""]),
            TeamDraft::new("2", "Team 2", ["", ""]),
        ]
    }

    /// True when this draft would pass confirmation on its own.
    pub fn is_complete(&self) -> bool {
        Team::try_from(self.clone()).is_ok()
    }
}

/// A confirmed team. Names are trimmed and non-empty; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamDraft")]
pub struct Team {
    id: TeamId,
    name: String,
    players: [String; PLAYERS_PER_TEAM],
}

impl Team {
    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[String; PLAYERS_PER_TEAM] {
        &self.players
    }
}

impl TryFrom<TeamDraft> for Team {
    type Error = SetupError;

    fn try_from(draft: TeamDraft) -> Result<Self, Self::Error> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(SetupError::EmptyTeamName {
                team_id: draft.id,
            });
        }
        if let Some(seat) = draft.players.iter().position(|p| p.trim().is_empty()) {
            return Err(SetupError::EmptyPlayerName {
                team_id: draft.id,
                seat,
            });
        }
        Ok(Team {
            name: name.to_owned(),
            players: draft.players.map(|p| p.trim().to_owned()),
            id: TeamId(draft.id),
        })
    }
}

/// Confirm both teams, moving a game out of setup.
pub fn confirm_teams(drafts: [TeamDraft; 2]) -> Result<[Team; 2], SetupError> {
    let [first, second] = drafts;
    let first = Team::try_from(first)?;
    let second = Team::try_from(second)?;
    ensure_distinct_ids(&first, &second)?;
    Ok([first, second])
}

pub(crate) fn ensure_distinct_ids(first: &Team, second: &Team) -> Result<(), SetupError> {
    if first.id == second.id {
        return Err(SetupError::DuplicateTeamId(first.id.0.clone()));
    }
    Ok(())
}
