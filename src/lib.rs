//! Ggrvs library crate
//!
//! This crate provides the core functionality for the `ggrvs` CLI. It is
//! organized into two modules: `dist` (the generalized gamma distribution
//! itself) and `sample` (batch drawing and fixed-precision formatting). The
//! binary `src/main.rs` calls `ggrvs_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//! - `dist::GenGamma`: the distribution, usable directly from other code.
//! - `sample::draw_many`: batch drawing against a caller-provided RNG.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod dist;
pub mod sample;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::sample::{draw_many, format_variate};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shape parameter of the generalized gamma distribution (positive)
    #[arg(allow_negative_numbers = true)]
    shape: f64,

    /// Power parameter of the generalized gamma distribution (non-zero,
    /// negative values select the inverse family)
    #[arg(allow_negative_numbers = true)]
    power: f64,

    /// Number of variates to draw
    count: usize,
}

/// Run the ggrvs CLI.
///
/// This function is the high-level entrypoint used by the `ggrvs` binary. It
/// parses the three positional arguments (shape, power, count), draws `count`
/// independent generalized gamma variates, and prints each one to stdout with
/// exactly 15 digits after the decimal point, one per line.
///
/// Malformed arguments are rejected by clap with a usage error and a non-zero
/// exit status before any output is produced. Parameters outside the
/// distribution's domain are printed to stderr and cause exit status 1; no
/// samples are emitted in that case.
pub fn run() {
    let cli = Cli::parse();

    let mut rng = StdRng::from_entropy();
    let variates = draw_many(cli.shape, cli.power, cli.count, &mut rng).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    for v in &variates {
        println!("{}", format_variate(*v));
    }
}
