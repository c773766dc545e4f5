//! Core domain types for Tower of Hanoi.

use super::action::{Move, MoveError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single disc, identified by its size.
///
/// Larger values denote larger discs. Sizes within a board are unique:
/// an N-disc game uses the sizes 1 through N exactly once each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disc(u8);

impl Disc {
    /// Creates a disc of the given size.
    pub fn new(size: u8) -> Self {
        Self(size)
    }

    /// Returns the disc size.
    pub fn size(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Disc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three pegs on the board.
///
/// Pegs are addressed by the fixed index set {0, 1, 2} and labeled
/// "A", "B", and "C" for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum PegId {
    /// Leftmost peg (index 0, label "A") - where every game starts.
    Left,
    /// Middle peg (index 1, label "B").
    Middle,
    /// Rightmost peg (index 2, label "C") - the target peg.
    Right,
}

impl PegId {
    /// All three pegs in display order.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Get the display label for this peg.
    #[instrument]
    pub fn label(&self) -> &'static str {
        match self {
            PegId::Left => "A",
            PegId::Middle => "B",
            PegId::Right => "C",
        }
    }

    /// Converts the peg to its board index (0-2).
    pub fn to_index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// Creates a peg from a board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PegId::Left),
            1 => Some(PegId::Middle),
            2 => Some(PegId::Right),
            _ => None,
        }
    }

    /// Parses a peg from its display label (case-insensitive).
    #[instrument]
    pub fn from_label(label: &str) -> Option<Self> {
        <PegId as strum::IntoEnumIterator>::iter()
            .find(|peg| peg.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A stack of discs, listed from bottom to top.
///
/// Invariant: disc sizes are strictly decreasing from bottom to top,
/// so a disc never rests on a smaller one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    /// Discs from bottom to top.
    discs: Vec<Disc>,
}

impl Peg {
    /// Creates a new empty peg.
    pub fn new() -> Self {
        Self { discs: Vec::new() }
    }

    /// Returns the topmost disc, if any.
    pub fn top(&self) -> Option<Disc> {
        self.discs.last().copied()
    }

    /// Returns the discs from bottom to top.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// Returns the number of discs on this peg.
    pub fn len(&self) -> usize {
        self.discs.len()
    }

    /// Checks whether the peg holds no discs.
    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Checks whether disc sizes strictly decrease from bottom to top.
    pub fn is_ordered(&self) -> bool {
        self.discs.windows(2).all(|pair| pair[0] > pair[1])
    }

    /// Pushes a disc on top (unchecked - use Board::relocate for validation).
    pub(crate) fn push(&mut self, disc: Disc) {
        self.discs.push(disc);
    }

    /// Removes and returns the topmost disc.
    pub(crate) fn pop(&mut self) -> Option<Disc> {
        self.discs.pop()
    }
}

impl Default for Peg {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete arrangement of discs across the three pegs.
///
/// Invariant: the discs across all pegs form the exact set 1..=N for
/// an N-disc game, each size appearing once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Pegs in index order: Left, Middle, Right.
    pegs: [Peg; 3],
}

impl Board {
    /// Creates the starting arrangement for a game of `discs` discs:
    /// every disc on tower A, largest at the bottom.
    pub fn new(discs: u8) -> Self {
        let discs = (1..=discs).rev().map(Disc::new).collect();
        Self {
            pegs: [Peg { discs }, Peg::new(), Peg::new()],
        }
    }

    /// Returns the peg with the given id.
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.to_index()]
    }

    /// Returns all three pegs in index order.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Returns the total number of discs on the board.
    pub fn disc_count(&self) -> usize {
        self.pegs.iter().map(Peg::len).sum()
    }

    /// Relocates the top disc of the move's source peg onto its
    /// destination peg.
    ///
    /// The checks mirror the physical rules: the source must hold a
    /// disc to take, and a disc may never rest on a smaller or
    /// equal-sized one. On error the board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::EmptySource`] if the source peg is empty,
    /// or [`MoveError::IllegalPlacement`] if the destination's top
    /// disc is not larger than the disc being moved.
    #[instrument(skip(self))]
    pub fn relocate(&mut self, mov: Move) -> Result<(), MoveError> {
        let disc = self
            .peg(mov.from)
            .top()
            .ok_or(MoveError::EmptySource(mov.from))?;

        if let Some(top) = self.peg(mov.to).top() {
            if top <= disc {
                return Err(MoveError::IllegalPlacement { disc, onto: top });
            }
        }

        self.pegs[mov.from.to_index()].pop();
        self.pegs[mov.to.to_index()].push(disc);
        Ok(())
    }

    /// Mutable access to a peg (for in-crate tests and corruption checks).
    #[cfg(test)]
    pub(crate) fn peg_mut(&mut self, id: PegId) -> &mut Peg {
        &mut self.pegs[id.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_stacks_left() {
        let board = Board::new(3);
        let sizes: Vec<u8> = board
            .peg(PegId::Left)
            .discs()
            .iter()
            .map(|disc| disc.size())
            .collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        assert!(board.peg(PegId::Middle).is_empty());
        assert!(board.peg(PegId::Right).is_empty());
    }

    #[test]
    fn test_peg_from_label() {
        assert_eq!(PegId::from_label("A"), Some(PegId::Left));
        assert_eq!(PegId::from_label("b"), Some(PegId::Middle));
        assert_eq!(PegId::from_label(" C "), Some(PegId::Right));
        assert_eq!(PegId::from_label("D"), None);
    }

    #[test]
    fn test_peg_ordering() {
        let mut peg = Peg::new();
        assert!(peg.is_ordered());

        peg.push(Disc::new(3));
        peg.push(Disc::new(1));
        assert!(peg.is_ordered());

        peg.push(Disc::new(2));
        assert!(!peg.is_ordered());
    }
}
