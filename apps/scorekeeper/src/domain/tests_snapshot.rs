use crate::domain::round::{RoundId, RoundInput};
use crate::domain::scoring::BidOutcome;
use crate::domain::snapshot::Scoreboard;
use crate::domain::state::GameStatus;
use crate::domain::teams::TeamSlot;
use crate::domain::test_state_helpers::{new_game, new_game_with_target, play, BOSTON_TEAM2};

#[test]
fn empty_game_scoreboard() {
    let board = Scoreboard::from_state(&new_game());

    assert_eq!(board.round_no, 1);
    assert_eq!(board.target_score, 500);
    assert!(board.history.is_empty());
    assert!(!board.is_complete());
    assert!(board.winner().is_none());
    for card in &board.cards {
        assert_eq!(card.total, 0);
        assert!(!card.leading);
        assert!(card.recent.is_empty());
    }
    assert_eq!(board.cards[0].name, "Team A");
    assert_eq!(board.cards[1].players, ["Cy".to_string(), "Di".to_string()]);
}

#[test]
fn history_rows_carry_outcomes_and_combined_score() {
    let state = play(&new_game(), &[RoundInput::new(4, 6, 9, 7)]);
    let board = Scoreboard::from_state(&state);

    assert_eq!(board.round_no, 2);
    let row = &board.history[0];
    assert_eq!(row.round_no, 1);
    assert_eq!(row.team1.outcome, BidOutcome::Made);
    assert_eq!(row.team1.score, 42);
    assert_eq!(row.team2.outcome, BidOutcome::Failed);
    assert_eq!(row.team2.score, -90);
    assert_eq!(row.combined, -48);
}

#[test]
fn leading_flag_follows_strict_lead() {
    let state = play(&new_game(), &[RoundInput::new(4, 6, 9, 7)]);
    let board = Scoreboard::from_state(&state);
    assert!(board.cards[0].leading);
    assert!(!board.cards[1].leading);

    // Same bid on both sides; team 2 edges ahead on overtricks.
    let close = play(&new_game(), &[RoundInput::new(5, 6, 5, 7)]);
    let board = Scoreboard::from_state(&close);
    assert_eq!(close.totals(), [51, 52]);
    assert!(board.cards[1].leading);
}

#[test]
fn recent_rounds_are_last_three_newest_first() {
    let state = play(
        &new_game(),
        &[
            RoundInput::new(1, 1, 1, 12),
            RoundInput::new(2, 2, 2, 11),
            RoundInput::new(3, 3, 3, 10),
            RoundInput::new(4, 4, 4, 9),
        ],
    );
    let board = Scoreboard::from_state(&state);
    let card = &board.cards[TeamSlot::Team1.index()];

    let numbers: Vec<usize> = card.recent.iter().map(|r| r.round_no).collect();
    assert_eq!(numbers, vec![4, 3, 2]);
    assert_eq!(card.recent[0].id, RoundId(4));
    assert_eq!(card.recent[0].line.bid, 4);
    assert_eq!(board.history.len(), 4);
    assert_eq!(board.history[0].round_no, 1);
}

#[test]
fn winner_card_is_exposed_when_complete() {
    let state = play(&new_game_with_target(130), &[BOSTON_TEAM2]);
    let board = Scoreboard::from_state(&state);

    assert!(board.is_complete());
    assert_eq!(
        board.status,
        GameStatus::Complete {
            winner: Some(TeamSlot::Team2)
        }
    );
    assert_eq!(board.winner().unwrap().name, "Team B");
}

#[test]
fn scoreboard_serializes_status_tag() {
    let board = Scoreboard::from_state(&new_game());
    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(json["status"]["status"], "in_progress");
    assert_eq!(json["cards"][0]["slot"], "team1");
}
