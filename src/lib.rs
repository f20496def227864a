//! Noughts - tic-tac-toe game logic
//!
//! Pure, deterministic tic-tac-toe: a [`GameState`] that validates and applies
//! moves, detects wins and draws, renders to a styled terminal grid, and
//! round-trips through JSON.
//!
//! # Example
//!
//! ```
//! use noughts::{GameState, MoveOutcome, Player};
//!
//! let mut state = GameState::new_game();
//! let outcome = state.apply_move(4, Player::X)?;
//! assert_eq!(outcome, MoveOutcome::Accepted { next: Player::O });
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod invariants;
mod position;
mod render;
mod rules;
mod state;
mod types;

// Crate-level exports - Move results
pub use action::{MoveError, MoveOutcome};

// Crate-level exports - Invariants
pub use invariants::{
    GameStateInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance,
    TerminalConsistent, WinningLineConsistent,
};

// Crate-level exports - Positions and parsing
pub use position::{InvalidIndex, ParsePositionError, Position, parse_position};

// Crate-level exports - Rules
pub use rules::{WINNING_LINES, check_winner, is_draw, is_full};

// Crate-level exports - Game state
pub use state::GameState;

// Crate-level exports - Core types
pub use types::{Board, Player, Square};
