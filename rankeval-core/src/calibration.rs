//! Platt scaling seam: mapping raw scores to calibrated probabilities.

use crate::error::Result;
use crate::types::ScoredLabel;

/// Fits the (a, b) parameters of the logistic score-to-probability mapping.
///
/// The fitting itself is typically delegated to an external non-linear
/// curve-fitting process; modelling it as an injected collaborator keeps
/// that process boundary out of the core and lets tests substitute a mock.
/// Only the two fitted floats cross back in.
pub trait PlattFitter {
    fn fit(&self, data: &[ScoredLabel]) -> Result<(f64, f64)>;
}

/// Calibrated probability of the positive class for a raw score, given
/// fitted Platt parameters: 1 / (1 + exp(a * score + b)).
pub fn platt_probability(a: f64, b: f64, score: f64) -> f64 {
    1.0 / (1.0 + (a * score + b).exp())
}
