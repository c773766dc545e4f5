//! Strictly Hanoi - command-line Tower of Hanoi solver.
//!
//! Streams the full solution for the requested disc count to stdout,
//! one move and board snapshot at a time.

#![warn(missing_docs)]

mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{self, Write};
use strictly_hanoi::solve;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the rendered solution on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(discs = cli.discs, "Solving Tower of Hanoi");

    let stdout = io::stdout();
    run(cli.discs, &mut stdout.lock())
}

/// Streams the rendered solution for `discs` discs into `out`.
fn run<W: Write>(discs: u8, out: &mut W) -> Result<()> {
    let mut count = 0;
    for step in solve(discs)? {
        let step = step?;
        render::write_step(out, count, &step)?;
        count += 1;
    }

    info!(steps = count, "Solution complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_streams_expected_step_count() {
        let mut out = Vec::new();
        run(3, &mut out).expect("valid size");

        let output = String::from_utf8(out).expect("utf-8 output");
        let move_lines = output.lines().filter(|line| line.starts_with('(')).count();
        assert_eq!(move_lines, 8); // initial state + 7 moves
    }

    #[test]
    fn test_run_rejects_oversized_games() {
        let mut out = Vec::new();
        let error = run(13, &mut out).expect_err("13 discs is out of range");

        assert!(error.to_string().contains("Invalid game size 13"));
        assert!(out.is_empty()); // nothing rendered before the failure
    }
}
