//! Game state and the move-application engine.

use crate::action::{MoveError, MoveOutcome};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete state of one tic-tac-toe game.
///
/// Serializes as a flat record - `board`, `current_player`, `winner`,
/// `game_over`, `winning_line` - so externally stored games keep a stable
/// field shape. `winner`, `game_over`, and `winning_line` default when
/// absent on deserialize.
///
/// The engine is synchronous and single-threaded. Callers mutating one
/// `GameState` from several writers must serialize those calls themselves;
/// [`GameState::apply_move`] is the only mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    #[serde(default)]
    pub(crate) winner: Option<Player>,
    #[serde(default)]
    pub(crate) game_over: bool,
    #[serde(default)]
    pub(crate) winning_line: Option<[Position; 3]>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new_game() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            winner: None,
            game_over: false,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this no longer changes; it stays on the mark
    /// that made the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true once the game has ended in a win or a draw.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Attempts to apply a move for `player` at `position` (0-8).
    ///
    /// On success the state is mutated in place and the outcome describes
    /// whether the game continues, was won, or ended in a draw. On error
    /// the state is left untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended
    /// - [`MoveError::WrongPlayer`] if it is not `player`'s turn
    /// - [`MoveError::InvalidPosition`] if `position` is outside 0-8
    /// - [`MoveError::SquareOccupied`] if the square is already taken
    #[instrument(skip(self))]
    pub fn apply_move(
        &mut self,
        position: usize,
        player: Player,
    ) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }

        if player != self.current_player {
            return Err(MoveError::WrongPlayer(player));
        }

        let pos = Position::from_index(position).ok_or(MoveError::InvalidPosition(position))?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(player));

        let outcome = if let Some((winner, line)) = rules::check_winner(&self.board) {
            self.winner = Some(winner);
            self.winning_line = Some(line);
            self.game_over = true;
            MoveOutcome::Won { winner, line }
        } else if rules::is_full(&self.board) {
            self.game_over = true;
            MoveOutcome::Drawn
        } else {
            self.current_player = player.opponent();
            MoveOutcome::Accepted {
                next: self.current_player,
            }
        };

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        Ok(outcome)
    }

    /// Serializes the state to its stable JSON record.
    ///
    /// # Errors
    ///
    /// Propagates any `serde_json` serialization failure.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restores a state from its JSON record.
    ///
    /// # Errors
    ///
    /// Propagates any `serde_json` parse failure.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
