//! Prints the sum, maximum and LIS length of a fixed sequence, one per line.
//!
//! Run with:
//! `cargo run --bin array-stats`
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see engine spans.

use anyhow::{Context, Result};
use array_stats::ArraySummary;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const INPUT: [i64; 4] = [2, 7, 11, 15];

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!(input = ?INPUT, "computing array statistics");
    let summary = ArraySummary::of(&INPUT).context("failed to summarize demo input")?;
    print!("{summary}");
    Ok(())
}
