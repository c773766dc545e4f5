//! Command-line interface for the Hanoi solver.

use clap::Parser;

/// Strictly Hanoi - prints every move solving the Tower of Hanoi
#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(about = "Prints the complete move sequence solving the Tower of Hanoi", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of discs to solve for (the solver supports at most 12)
    #[arg(value_parser = clap::value_parser!(u8).range(0..=99))]
    pub discs: u8,
}
