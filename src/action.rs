//! Outcomes and errors produced by applying a move.
//!
//! Both sides of the result are caller-facing messages: a rejected move is
//! a recoverable value, never a fault, and leaves the game state untouched.

use crate::position::Position;
use crate::types::Player;

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveOutcome {
    /// Move accepted; the game continues with the next player.
    #[display("Move accepted. {next} to move.")]
    Accepted {
        /// Player who moves next.
        next: Player,
    },
    /// The move completed a line and won the game.
    #[display("Player {winner} wins!")]
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// The move filled the board with no winner.
    #[display("It's a draw!")]
    Drawn,
}

/// Error produced when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
    /// It is not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
    /// The index does not name a board square.
    #[display("Invalid position {} (expected 0-8)", _0)]
    InvalidPosition(usize),
    /// The square is already taken.
    #[display("Square {} is already taken", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}
