//! Winning-line invariant: a recorded line matches board and winner.

use super::Invariant;
use crate::rules::WINNING_LINES;
use crate::state::GameState;
use crate::types::Square;

/// Invariant: a recorded winning line is one of the 8 fixed triples, is
/// uniformly occupied by the recorded winner, and implies the game is over.
/// A winner without a recorded line is likewise a violation.
pub struct WinningLineConsistent;

impl Invariant<GameState> for WinningLineConsistent {
    fn holds(state: &GameState) -> bool {
        match (state.winning_line(), state.winner()) {
            (None, None) => true,
            (Some(line), Some(winner)) => {
                WINNING_LINES.contains(&line)
                    && line
                        .iter()
                        .all(|pos| state.board().get(*pos) == Square::Occupied(winner))
                    && state.game_over()
            }
            (Some(_), None) | (None, Some(_)) => false,
        }
    }

    fn description() -> &'static str {
        "winning line is a fixed triple held by the winner in a finished game"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_new_game_holds() {
        let state = GameState::new_game();
        assert!(WinningLineConsistent::holds(&state));
    }

    #[test]
    fn test_diagonal_win_holds() {
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

        assert_eq!(
            state.winning_line(),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
        assert!(WinningLineConsistent::holds(&state));
    }

    #[test]
    fn test_line_without_winner_violates() {
        let mut state = GameState::new_game();
        state.winning_line = Some([Position::TopLeft, Position::TopCenter, Position::TopRight]);

        assert!(!WinningLineConsistent::holds(&state));
    }

    #[test]
    fn test_line_not_held_by_winner_violates() {
        let mut state = GameState::new_game();
        state.winner = Some(Player::X);
        state.game_over = true;
        state.winning_line = Some([Position::TopLeft, Position::TopCenter, Position::TopRight]);

        assert!(!WinningLineConsistent::holds(&state));
    }
}
