//! Mark-balance invariant: X moves first, so mark counts stay within one.

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: the number of X marks equals the number of O marks, or
/// exceeds it by exactly one.
///
/// Any board reachable through alternating moves starting with X satisfies
/// this; a violation means a mark was placed out of turn or overwritten.
pub struct MarkBalance;

impl Invariant<GameState> for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    #[test]
    fn test_new_game_holds() {
        let state = GameState::new_game();
        assert!(MarkBalance::holds(&state));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let mut state = GameState::new_game();
        state.apply_move(4, Player::X).unwrap();
        assert!(MarkBalance::holds(&state));
        state.apply_move(0, Player::O).unwrap();
        assert!(MarkBalance::holds(&state));
    }

    #[test]
    fn test_double_mark_violates() {
        let mut state = GameState::new_game();
        state
            .board
            .set(Position::TopLeft, Square::Occupied(Player::X));
        state.board.set(Position::Center, Square::Occupied(Player::X));

        assert!(!MarkBalance::holds(&state));
    }
}
