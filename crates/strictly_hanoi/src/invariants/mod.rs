//! First-class invariants for Tower of Hanoi.
//!
//! Invariants are logical properties that must hold throughout a
//! solution. They are testable independently and serve as
//! documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
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
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 2-tuples
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

pub mod disc_conservation;
pub mod ordered_pegs;

pub use disc_conservation::DiscConservationInvariant;
pub use ordered_pegs::OrderedPegsInvariant;

/// All Hanoi board invariants as a composable set.
pub type HanoiInvariants = (OrderedPegsInvariant, DiscConservationInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Disc, PegId};

    #[test]
    fn test_invariant_set_holds_for_new_board() {
        let board = Board::new(4);
        assert!(HanoiInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        let board = Board::new(0);
        assert!(HanoiInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut board = Board::new(2);
        // Corrupt the board: a duplicate disc resting on a smaller one.
        board.peg_mut(PegId::Left).push(Disc::new(2));

        let violations = HanoiInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
