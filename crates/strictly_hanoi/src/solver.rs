//! The move generator: a lazy, ordered stream of solution steps.

use super::action::{Move, MoveError};
use super::step::Step;
use super::types::{Board, PegId};
use tracing::{instrument, trace};

#[cfg(debug_assertions)]
use super::invariants::{HanoiInvariants, InvariantSet};

/// Largest supported game, bounding the output to 2^12 - 1 moves.
pub const MAX_DISCS: u8 = 12;

/// Error that can occur while producing a solution.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SolveError {
    /// The requested disc count exceeds [`MAX_DISCS`].
    #[display("Invalid game size {}: at most {} discs are supported", _0, MAX_DISCS)]
    InvalidSize(u8),

    /// A transfer was requested with non-distinct pegs.
    #[display("Invalid peg configuration: from {}, to {}, via {}", from, to, via)]
    IndistinctPegs {
        /// The source peg.
        from: PegId,
        /// The destination peg.
        to: PegId,
        /// The auxiliary peg.
        via: PegId,
    },

    /// A single-disc relocation failed.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),

    /// A board invariant failed to hold after a relocation.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SolveError {}

/// Pending work for the explicit recursion stack.
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Emit the starting arrangement.
    Start,
    /// Relocate a single disc.
    Relocate(Move),
    /// Transfer `count` discs from `from` to `to` using `via`.
    Transfer {
        count: u8,
        from: PegId,
        to: PegId,
        via: PegId,
    },
}

/// Lazy, ordered stream of the steps solving one game.
///
/// The first step is the starting arrangement; exactly 2^n - 1 move
/// steps follow, in the canonical recursive order. The recursion is
/// simulated with an explicit work stack, so each step is computed
/// only when consumed. Every yielded [`Step`] owns an independent
/// snapshot of the board.
///
/// Any error ends the stream: the pending work is discarded and
/// subsequent calls to `next` return `None`.
#[derive(Debug, Clone)]
pub struct Solution {
    board: Board,
    stack: Vec<Frame>,
}

impl Solution {
    fn new(discs: u8) -> Self {
        // Popped in reverse: the starting snapshot comes out first.
        let stack = vec![
            Frame::Transfer {
                count: discs,
                from: PegId::Left,
                to: PegId::Right,
                via: PegId::Middle,
            },
            Frame::Start,
        ];
        Self {
            board: Board::new(discs),
            stack,
        }
    }

    /// Steps not yet produced, assuming no error cuts the stream short.
    fn remaining(&self) -> usize {
        self.stack
            .iter()
            .map(|frame| match frame {
                Frame::Start | Frame::Relocate(_) => 1,
                Frame::Transfer { count, .. } => (1usize << count) - 1,
            })
            .sum()
    }
}

impl Iterator for Solution {
    type Item = Result<Step, SolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Start => return Some(Ok(Step::initial(self.board.clone()))),
                Frame::Transfer {
                    count,
                    from,
                    to,
                    via,
                } => {
                    if from == to || from == via || to == via {
                        self.stack.clear();
                        return Some(Err(SolveError::IndistinctPegs { from, to, via }));
                    }
                    if count == 0 {
                        continue;
                    }
                    // Pushed in reverse of execution order: move the top
                    // count - 1 discs out of the way, relocate the largest,
                    // then move them back on top of it.
                    self.stack.push(Frame::Transfer {
                        count: count - 1,
                        from: via,
                        to,
                        via: from,
                    });
                    self.stack.push(Frame::Relocate(Move::new(from, to)));
                    self.stack.push(Frame::Transfer {
                        count: count - 1,
                        from,
                        to: via,
                        via: to,
                    });
                }
                Frame::Relocate(mov) => {
                    if let Err(error) = self.board.relocate(mov) {
                        self.stack.clear();
                        return Some(Err(error.into()));
                    }
                    trace!(%mov, "relocated disc");

                    // Postcondition: verify board invariants in debug builds.
                    #[cfg(debug_assertions)]
                    if let Err(violations) = HanoiInvariants::check_all(&self.board) {
                        self.stack.clear();
                        let descriptions = violations
                            .iter()
                            .map(|violation| violation.description.as_str())
                            .collect::<Vec<_>>()
                            .join("; ");
                        return Some(Err(SolveError::InvariantViolation(descriptions)));
                    }

                    return Some(Ok(Step::moved(self.board.clone(), mov)));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl std::iter::FusedIterator for Solution {}

/// Produces the lazy solution stream for a game of `discs` discs.
///
/// The starting arrangement stacks every disc on tower A, largest at
/// the bottom; the solved arrangement stacks them all on tower C.
/// Re-invoking with the same count yields an identical sequence.
///
/// # Errors
///
/// Fails with [`SolveError::InvalidSize`] before any step is produced
/// if `discs` exceeds [`MAX_DISCS`].
#[instrument]
pub fn solve(discs: u8) -> Result<Solution, SolveError> {
    if discs > MAX_DISCS {
        return Err(SolveError::InvalidSize(discs));
    }
    trace!(discs, "starting solution stream");
    Ok(Solution::new(discs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    #[test]
    fn test_size_hint_is_exact() {
        for discs in 0..=4u8 {
            let mut solution = solve(discs).expect("valid size");
            let expected = 1 + ((1usize << discs) - 1);
            assert_eq!(solution.size_hint(), (expected, Some(expected)));

            solution.next();
            assert_eq!(solution.size_hint(), (expected - 1, Some(expected - 1)));
        }
    }

    #[test]
    fn test_stream_ends_after_exhaustion() {
        let mut solution = solve(1).expect("valid size");
        assert!(solution.next().is_some());
        assert!(solution.next().is_some());
        assert!(solution.next().is_none());
        assert!(solution.next().is_none());
    }

    #[test]
    fn test_indistinct_pegs_fail_and_fuse() {
        let mut solution = Solution {
            board: Board::new(1),
            stack: vec![Frame::Transfer {
                count: 1,
                from: PegId::Left,
                to: PegId::Left,
                via: PegId::Middle,
            }],
        };

        match solution.next() {
            Some(Err(SolveError::IndistinctPegs { from, to, .. })) => {
                assert_eq!(from, PegId::Left);
                assert_eq!(to, PegId::Left);
            }
            other => panic!("expected IndistinctPegs, got {:?}", other),
        }
        assert!(solution.next().is_none());
    }

    #[test]
    fn test_relocation_failure_fuses_stream() {
        let mut solution = Solution {
            board: Board::new(0),
            stack: vec![
                Frame::Relocate(Move::new(PegId::Middle, PegId::Right)),
                Frame::Relocate(Move::new(PegId::Left, PegId::Right)),
            ],
        };

        match solution.next() {
            Some(Err(SolveError::Move(MoveError::EmptySource(peg)))) => {
                assert_eq!(peg, PegId::Left);
            }
            other => panic!("expected EmptySource, got {:?}", other),
        }
        assert!(solution.next().is_none());
    }

    #[test]
    fn test_initial_step_comes_first() {
        let mut solution = solve(2).expect("valid size");
        let first = solution.next().expect("initial step").expect("clean step");
        assert_eq!(first.kind(), StepKind::Initial);
    }
}
