//! Textual rendering of solution steps.

use anyhow::{Result, bail};
use std::io::Write;
use strictly_hanoi::{PegId, Step, StepKind};

/// Writes one step: its move line, the three peg lines in fixed
/// A, B, C order, and a blank separator line.
///
/// `index` is the 0-based position of the step in the stream; the
/// initial step is numbered 0, so move lines come out 1-indexed.
pub fn write_step<W: Write>(out: &mut W, index: usize, step: &Step) -> Result<()> {
    write_move_line(out, index, step)?;
    write_board(out, step)?;
    writeln!(out)?;
    Ok(())
}

fn write_move_line<W: Write>(out: &mut W, index: usize, step: &Step) -> Result<()> {
    match step.kind() {
        StepKind::Initial => writeln!(out, "(0) Initial state")?,
        StepKind::Moved(mov) => {
            // The moved disc is read back as the destination's new top.
            let Some(disc) = step.board().peg(mov.to).top() else {
                bail!("Invalid move: target tower {} is empty", mov.to);
            };
            writeln!(
                out,
                "({}) Move disc {} from tower {} to {}",
                index, disc, mov.from, mov.to
            )?;
        }
    }
    Ok(())
}

fn write_board<W: Write>(out: &mut W, step: &Step) -> Result<()> {
    for id in PegId::ALL {
        let discs = step
            .board()
            .peg(id)
            .discs()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{} {}", id, discs)?;
    }
    Ok(())
}
