//! Terminal-consistency invariant: game_over matches win or full board.

use super::Invariant;
use crate::rules;
use crate::state::GameState;

/// Invariant: the game is over exactly when a winner exists or the board
/// is full.
pub struct TerminalConsistent;

impl Invariant<GameState> for TerminalConsistent {
    fn holds(state: &GameState) -> bool {
        let terminal = state.winner().is_some() || rules::is_full(state.board());
        state.game_over() == terminal
    }

    fn description() -> &'static str {
        "game_over holds exactly when a winner exists or the board is full"
    }
}
