//! Board positions and move-input parsing.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (indices 0-8, row-major).
///
/// Serializes as its integer index so a recorded winning line reads as
/// `[0, 4, 8]` rather than variant names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Position {
    /// Top-left (position 0, coordinate A1)
    TopLeft,
    /// Top-center (position 1, coordinate A2)
    TopCenter,
    /// Top-right (position 2, coordinate A3)
    TopRight,
    /// Middle-left (position 3, coordinate B1)
    MiddleLeft,
    /// Center (position 4, coordinate B2)
    Center,
    /// Middle-right (position 5, coordinate B3)
    MiddleRight,
    /// Bottom-left (position 6, coordinate C1)
    BottomLeft,
    /// Bottom-center (position 7, coordinate C2)
    BottomCenter,
    /// Bottom-right (position 8, coordinate C3)
    BottomRight,
}

/// Error for a numeric index that does not name a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("invalid board index {}", _0)]
pub struct InvalidIndex(pub u8);

impl std::error::Error for InvalidIndex {}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Grid coordinate for this position (row letter A-C, column digit 1-3).
    pub fn coord(self) -> &'static str {
        match self {
            Position::TopLeft => "A1",
            Position::TopCenter => "A2",
            Position::TopRight => "A3",
            Position::MiddleLeft => "B1",
            Position::Center => "B2",
            Position::MiddleRight => "B3",
            Position::BottomLeft => "C1",
            Position::BottomCenter => "C2",
            Position::BottomRight => "C3",
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.to_index() as u8
    }
}

impl TryFrom<u8> for Position {
    type Error = InvalidIndex;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::from_index(value as usize).ok_or(InvalidIndex(value))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coord())
    }
}

/// Error returned when a position string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParsePositionError {
    /// Input was empty.
    #[display("Please enter a position")]
    Empty,
    /// A digit string was given outside 1-9.
    #[display("Position must be 1-9")]
    OutOfRange,
    /// Input matched neither notation.
    #[display("Invalid format. Use A1-C3 or 1-9")]
    Unrecognized,
}

impl std::error::Error for ParsePositionError {}

/// Parses a move input like `"B2"` or `"5"` into a position.
///
/// Accepts the two-character row-letter/column-digit form (case-insensitive)
/// or a bare digit 1-9. Independent of any game state.
#[instrument]
pub fn parse_position(input: &str) -> Result<Position, ParsePositionError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParsePositionError::Empty);
    }

    // Letter+digit form: A1..C3
    let upper = input.to_uppercase();
    let bytes = upper.as_bytes();
    if bytes.len() == 2 && (b'A'..=b'C').contains(&bytes[0]) && (b'1'..=b'3').contains(&bytes[1]) {
        let row = (bytes[0] - b'A') as usize;
        let col = (bytes[1] - b'1') as usize;
        return Ok(Position::ALL[row * 3 + col]);
    }

    // Bare digit form: 1..9
    if input.chars().all(|c| c.is_ascii_digit()) {
        return match input.parse::<usize>() {
            Ok(num @ 1..=9) => Ok(Position::ALL[num - 1]),
            _ => Err(ParsePositionError::OutOfRange),
        };
    }

    Err(ParsePositionError::Unrecognized)
}
