//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every successful
//! move. They are checked in debug builds and testable independently.

mod mark_balance;
mod terminal;
mod winning_line;

pub use mark_balance::MarkBalance;
pub use terminal::TerminalConsistent;
pub use winning_line::WinningLineConsistent;

#[cfg(debug_assertions)]
use crate::state::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !A::holds(state) {
            violations.push(InvariantViolation {
                description: A::description().to_string(),
            });
        }

        if !B::holds(state) {
            violations.push(InvariantViolation {
                description: B::description().to_string(),
            });
        }

        if !C::holds(state) {
            violations.push(InvariantViolation {
                description: C::description().to_string(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All game-state invariants as a composable set.
pub type GameStateInvariants = (MarkBalance, TerminalConsistent, WinningLineConsistent);

/// Asserts that every game invariant holds, panicking with the violated
/// descriptions otherwise. Called after each successful move in debug
/// builds.
#[cfg(debug_assertions)]
pub(crate) fn assert_invariants(state: &GameState) {
    if let Err(violations) = GameStateInvariants::check_all(state) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("game invariant violated: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;
    use crate::types::Player;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let state = GameState::new_game();
        assert!(GameStateInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut state = GameState::new_game();
        state.apply_move(0, Player::X).unwrap();
        state.apply_move(4, Player::O).unwrap();
        state.apply_move(2, Player::X).unwrap();

        assert!(GameStateInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_violations() {
        let mut state = GameState::new_game();
        // Corrupt the state: terminal with neither winner nor a full board.
        state.game_over = true;

        let violations = GameStateInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
    }
}
