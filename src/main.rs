//! CLI entry point for the statistics calculator.
//!
//! Reads one line of integers from standard input and prints the mean,
//! median and mode(s).

use anyhow::Result;
use clap::Parser;
use intstats::{
    output::{write_banner, write_no_data, write_prompt, write_report},
    parser::read_integers,
    stats::Dataset,
};
use std::io;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "intstats", version)]
#[command(about = "Compute mean, median and mode of integers read from stdin", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    init_tracing();

    let _cli = Cli::parse();

    install_interrupt_handler()?;

    {
        let mut out = io::stdout().lock();
        write_banner(&mut out)?;
        write_prompt(&mut out)?;
    }

    // stdout stays unlocked while blocked on stdin so the interrupt handler can write
    let data = Dataset::new(read_integers(io::stdin().lock())?);

    let mut out = io::stdout().lock();

    if data.is_empty() {
        info!("No valid integers parsed");
        write_no_data(&mut out)?;
        return Ok(());
    }

    let summary = data.summarize();
    write_report(&mut out, &data, &summary)?;

    info!(
        count = summary.count,
        mean = summary.mean,
        median = summary.median,
        modes = summary.modes.len(),
        "Statistics computed"
    );

    Ok(())
}

/// Treats Ctrl-C like end of input: print the no-data notice and exit cleanly.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        info!("Interrupted while waiting for input");
        let mut out = io::stdout().lock();
        let _ = write_no_data(&mut out);
        std::process::exit(0);
    })?;
    Ok(())
}

/// Logging setup: colored stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        );

    tracing_subscriber::registry().with(stderr_layer).init();
}
