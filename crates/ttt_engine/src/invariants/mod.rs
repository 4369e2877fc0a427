//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that must hold for every board reached
//! through legal play. They are testable independently and checked by the
//! turn loop after every ply.

#[cfg(kani)]
mod verification;

pub mod balanced_marks;
pub mod single_winner;

pub use balanced_marks::BalancedMarksInvariant;
pub use single_winner::SingleWinnerInvariant;

use crate::types::Board;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarksInvariant, SingleWinnerInvariant);

/// Convenience wrapper for checking [`BoardInvariants`].
pub fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(check_board(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let board: Board = "X.X|.O.|O.X".parse().unwrap();
        assert!(check_board(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Four X against one O, and both own a row
        let board: Board = "XXX|OOO|XX.".parse().unwrap();
        let violations = check_board(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
