//! Solution step snapshots.

use super::action::Move;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// How a step came to be.
///
/// The initial arrangement is its own variant rather than a sentinel
/// move, so consumers never have to infer it from index equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// The starting arrangement, before any disc has moved.
    Initial,
    /// The arrangement produced by relocating one disc.
    Moved(Move),
}

impl StepKind {
    /// Returns the move that produced this step, if any.
    pub fn as_move(&self) -> Option<Move> {
        match self {
            StepKind::Initial => None,
            StepKind::Moved(mov) => Some(*mov),
        }
    }
}

/// A board snapshot paired with the move that produced it.
///
/// Each step owns an independent copy of the board: once yielded it
/// never changes, no matter what the generator does afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The board after the move.
    board: Board,
    /// What produced this board.
    kind: StepKind,
}

impl Step {
    /// Creates the initial step.
    pub(crate) fn initial(board: Board) -> Self {
        Self {
            board,
            kind: StepKind::Initial,
        }
    }

    /// Creates a step produced by a move.
    pub(crate) fn moved(board: Board, mov: Move) -> Self {
        Self {
            board,
            kind: StepKind::Moved(mov),
        }
    }

    /// Returns the board after the move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns what produced this step.
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Checks whether this is the initial step.
    pub fn is_initial(&self) -> bool {
        matches!(self.kind, StepKind::Initial)
    }
}
