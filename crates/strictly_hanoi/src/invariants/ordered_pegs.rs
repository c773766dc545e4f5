//! Ordered pegs invariant: no disc rests on a smaller disc.

use super::Invariant;
use crate::types::Board;

/// Invariant: every peg is strictly decreasing from bottom to top.
///
/// This is the defining rule of the puzzle. The generator only ever
/// relocates a disc onto a larger one, so it holds for every board it
/// produces.
pub struct OrderedPegsInvariant;

impl Invariant<Board> for OrderedPegsInvariant {
    fn holds(board: &Board) -> bool {
        board.pegs().iter().all(|peg| peg.is_ordered())
    }

    fn description() -> &'static str {
        "Disc sizes are strictly decreasing from bottom to top on every peg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Disc, PegId};

    #[test]
    fn test_new_board_holds() {
        assert!(OrderedPegsInvariant::holds(&Board::new(5)));
    }

    #[test]
    fn test_empty_board_holds() {
        assert!(OrderedPegsInvariant::holds(&Board::new(0)));
    }

    #[test]
    fn test_inverted_stack_violates() {
        let mut board = Board::new(0);
        board.peg_mut(PegId::Middle).push(Disc::new(1));
        board.peg_mut(PegId::Middle).push(Disc::new(2));

        assert!(!OrderedPegsInvariant::holds(&board));
    }
}
