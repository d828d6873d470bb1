#![forbid(unsafe_code)]

use std::time::Instant;

use clap::Parser;
use log::info;
use percolation::PercolationStats;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Estimates the percolation threshold of an N-by-N grid by Monte Carlo
/// simulation.
#[derive(Parser)]
struct Args {
    /// Grid side length
    size: usize,
    /// Number of independent trials
    trials: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let args = Args::parse();
    info!(
        "running {} trials on a {}x{} grid",
        args.trials, args.size, args.size
    );

    let started = Instant::now();
    let stats = PercolationStats::new(args.size, args.trials)?;
    let elapsed = started.elapsed();

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
    println!("elapsed time            = {:.3}s", elapsed.as_secs_f64());

    Ok(())
}
