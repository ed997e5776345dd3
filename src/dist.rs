//! Generalized gamma distribution.
//!
//! The unit-scale generalized gamma distribution with shape `a > 0` and power
//! `c != 0` has density `|c| x^(c*a - 1) exp(-x^c) / Gamma(a)` on `x > 0`. A
//! variate is drawn by sampling `G ~ Gamma(a, 1)` and raising it to `1/c`;
//! negative powers give the inverse family (e.g. power -1 is inverse-gamma).

use rand::Rng;
use rand_distr::{Distribution, Gamma};

/// Generalized gamma distribution with unit scale.
#[derive(Debug, Clone, Copy)]
pub struct GenGamma {
    base: Gamma<f64>,
    inv_power: f64,
}

impl GenGamma {
    /// Build a distribution from a shape and a power parameter.
    ///
    /// # Errors
    /// Returns `Err(String)` when `shape` is not a finite positive number or
    /// when `power` is zero or not finite.
    pub fn new(shape: f64, power: f64) -> Result<Self, String> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(format!("shape must be finite and positive, got {}", shape));
        }
        if !power.is_finite() || power == 0.0 {
            return Err(format!("power must be finite and non-zero, got {}", power));
        }
        let base = Gamma::new(shape, 1.0).map_err(|e| format!("gamma setup: {}", e))?;
        Ok(Self {
            base,
            inv_power: 1.0 / power,
        })
    }
}

impl Distribution<f64> for GenGamma {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.base.sample(rng).powf(self.inv_power)
    }
}
