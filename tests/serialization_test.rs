//! Tests for the stable JSON record shape and its round-trip.

use noughts::{GameState, Player};
use serde_json::json;

#[test]
fn test_new_game_serializes_to_flat_record() {
    let state = GameState::new_game();
    let value = serde_json::to_value(&state).unwrap();

    assert_eq!(
        value,
        json!({
            "board": [null, null, null, null, null, null, null, null, null],
            "current_player": "X",
            "winner": null,
            "game_over": false,
            "winning_line": null,
        })
    );
}

#[test]
fn test_won_game_serializes_line_as_indices() {
    let mut state = GameState::new_game();
    for (pos, player) in [
        (0, Player::X),
        (1, Player::O),
        (4, Player::X),
        (2, Player::O),
        (8, Player::X),
    ] {
        state.apply_move(pos, player).unwrap();
    }

    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(
        value,
        json!({
            "board": ["X", "O", "O", null, "X", null, null, null, "X"],
            "current_player": "X",
            "winner": "X",
            "game_over": true,
            "winning_line": [0, 4, 8],
        })
    );
}

#[test]
fn test_round_trip_fresh_state() {
    let state = GameState::new_game();
    let restored = GameState::from_json(&state.to_json().unwrap()).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_round_trip_mid_game() {
    let mut state = GameState::new_game();
    state.apply_move(4, Player::X).unwrap();
    state.apply_move(0, Player::O).unwrap();
    state.apply_move(8, Player::X).unwrap();

    let restored = GameState::from_json(&state.to_json().unwrap()).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_round_trip_won_game() {
    let mut state = GameState::new_game();
    for (pos, player) in [
        (0, Player::X),
        (3, Player::O),
        (1, Player::X),
        (4, Player::O),
        (2, Player::X),
    ] {
        state.apply_move(pos, player).unwrap();
    }

    let restored = GameState::from_json(&state.to_json().unwrap()).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_missing_optional_fields_default() {
    let data = json!({
        "board": [null, null, null, null, "X", null, null, null, null],
        "current_player": "O",
    })
    .to_string();

    let state = GameState::from_json(&data).unwrap();
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(state.winner(), None);
    assert!(!state.game_over());
    assert_eq!(state.winning_line(), None);
}

#[test]
fn test_malformed_record_fails_to_parse() {
    assert!(GameState::from_json("not json").is_err());
    assert!(GameState::from_json(r#"{"board": [null], "current_player": "X"}"#).is_err());
}
