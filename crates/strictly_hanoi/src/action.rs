//! First-class move types for Tower of Hanoi.
//!
//! Moves are domain events, not side effects. They record which peg a
//! disc was taken from and which it was placed on, and can be
//! validated, serialized, and replayed independently of execution.

use super::types::{Disc, PegId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: relocating the topmost disc of one peg onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The peg the disc is taken from.
    pub from: PegId,
    /// The peg the disc is placed on.
    pub to: PegId,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from.label(), self.to.label())
    }
}

/// Error that can occur when relocating a single disc.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The source peg has no disc to take.
    #[display("Cannot take a disc from empty tower {}", _0)]
    EmptySource(PegId),

    /// The disc would rest on a smaller or equal-sized disc.
    #[display("Cannot place disc {} on top of disc {}", disc, onto)]
    IllegalPlacement {
        /// The disc being moved.
        disc: Disc,
        /// The disc it would rest on.
        onto: Disc,
    },
}

impl std::error::Error for MoveError {}
