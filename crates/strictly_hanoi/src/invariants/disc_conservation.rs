//! Disc conservation invariant: no disc appears twice or goes missing.

use super::Invariant;
use crate::types::Board;

/// Invariant: the discs across all pegs form the exact set 1..=N.
///
/// Verified by collecting every disc size on the board and checking
/// that, sorted, they are precisely 1, 2, .., N. This catches both
/// duplicated and vanished discs regardless of which peg they sit on.
pub struct DiscConservationInvariant;

impl Invariant<Board> for DiscConservationInvariant {
    fn holds(board: &Board) -> bool {
        let mut sizes: Vec<u8> = board
            .pegs()
            .iter()
            .flat_map(|peg| peg.discs().iter().map(|disc| disc.size()))
            .collect();
        sizes.sort_unstable();

        sizes
            .iter()
            .enumerate()
            .all(|(index, &size)| usize::from(size) == index + 1)
    }

    fn description() -> &'static str {
        "Discs across all pegs form the exact set 1..=N"
    }
}
