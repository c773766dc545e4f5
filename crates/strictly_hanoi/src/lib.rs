//! Strictly Hanoi - pure Tower of Hanoi game logic
//!
//! This library produces the complete move sequence solving the Tower
//! of Hanoi puzzle for a given number of discs.
//!
//! # Architecture
//!
//! - **Types**: Discs, pegs, and boards with their structural rules
//! - **Actions**: First-class moves and the single-disc relocation contract
//! - **Solver**: A lazy stream of board snapshots in canonical recursive order
//! - **Invariants**: Board properties as independently testable objects
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{solve, StepKind};
//!
//! # fn main() -> Result<(), strictly_hanoi::SolveError> {
//! let steps = solve(3)?.collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(steps.len(), 8);
//! assert_eq!(steps[0].kind(), StepKind::Initial);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod solver;
mod step;
mod types;

// Public invariant framework
pub mod invariants;

// Crate-level exports - Moves and relocation errors
pub use action::{Move, MoveError};

// Crate-level exports - Solver
pub use solver::{MAX_DISCS, Solution, SolveError, solve};

// Crate-level exports - Solution steps
pub use step::{Step, StepKind};

// Crate-level exports - Domain types
pub use types::{Board, Disc, Peg, PegId};
