//! Batch drawing and output formatting.
//!
//! This module exposes the single batch entry used by the CLI, `draw_many`,
//! and the fixed-precision renderer `format_variate`. Drawing takes the RNG
//! as an argument so callers (and tests) control seeding.

use rand::Rng;
use rand_distr::Distribution;

use crate::dist::GenGamma;

/// Draw `count` independent generalized gamma variates.
///
/// Parameters
/// - `shape`: distribution shape parameter, must be finite and positive.
/// - `power`: distribution power parameter, must be finite and non-zero.
/// - `count`: number of variates to draw.
/// - `rng`: generator the draws consume entropy from; pass a seeded `StdRng`
///   for reproducible output.
///
/// Returns
/// - `Ok(Vec<f64>)` with exactly `count` samples on success.
/// - `Err(String)` when the parameters are outside the distribution's domain.
///   Domain errors surface before the first draw, so no samples are produced
///   at all in that case.
pub fn draw_many<R: Rng + ?Sized>(
    shape: f64,
    power: f64,
    count: usize,
    rng: &mut R,
) -> Result<Vec<f64>, String> {
    let dist = GenGamma::new(shape, power)?;
    Ok((0..count).map(|_| dist.sample(rng)).collect())
}

/// Render a variate as a fixed-point decimal with exactly 15 digits after the
/// decimal point.
pub fn format_variate(v: f64) -> String {
    format!("{:.15}", v)
}
