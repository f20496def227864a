//! Terminal rendering for game states.
//!
//! Pure formatting: no side effects, no error conditions. Styling uses ANSI
//! escapes, matching the rest of the terminal surface.

use crate::position::Position;
use crate::state::GameState;
use crate::types::{Player, Square};

/// Bold green, used for the winning line.
const WIN_STYLE: &str = "\x1b[1;32m";
/// Bold yellow, used for the highlighted last move.
const HIGHLIGHT_STYLE: &str = "\x1b[1;33m";
const RESET: &str = "\x1b[0m";

const ROW_LABELS: [char; 3] = ['A', 'B', 'C'];

impl GameState {
    /// Formats the board as a labeled grid.
    ///
    /// Rows are labeled A-C and columns 1-3. Cells on the winning line are
    /// emphasized; `highlight` marks the most recent move with a weaker
    /// emphasis. A highlighted cell that sits on the winning line keeps the
    /// winning style.
    pub fn render(&self, highlight: Option<usize>) -> String {
        let mut lines = Vec::new();
        lines.push(String::new());
        lines.push("     1   2   3".to_string());
        lines.push("   ┌───┬───┬───┐".to_string());

        for row in 0..3 {
            let mut cells = Vec::new();
            for col in 0..3 {
                let idx = row * 3 + col;
                let display = match self.board().get(Position::ALL[idx]) {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(player) => self.styled_mark(player, idx, highlight),
                };
                cells.push(format!(" {} ", display));
            }
            lines.push(format!(" {} │{}│", ROW_LABELS[row], cells.join("│")));
            if row < 2 {
                lines.push("   ├───┼───┼───┤".to_string());
            }
        }

        lines.push("   └───┴───┴───┘".to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    fn styled_mark(&self, player: Player, idx: usize, highlight: Option<usize>) -> String {
        let on_winning_line = self
            .winning_line()
            .is_some_and(|line| line.iter().any(|pos| pos.to_index() == idx));

        if on_winning_line {
            format!("{}{}{}", WIN_STYLE, player, RESET)
        } else if highlight == Some(idx) {
            format!("{}{}{}", HIGHLIGHT_STYLE, player, RESET)
        } else {
            player.to_string()
        }
    }
}
