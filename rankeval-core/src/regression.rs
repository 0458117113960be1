//! Error statistics over paired (expected, predicted) value sequences.

use crate::error::{Error, Result};

fn check_paired(expected: &[f64], predicted: &[f64]) -> Result<()> {
    if expected.is_empty() {
        return Err(Error::InvalidArgument("empty value sequences".to_owned()));
    }
    if expected.len() != predicted.len() {
        return Err(Error::InvalidArgument(format!(
            "expected length {} != predicted length {}",
            expected.len(),
            predicted.len()
        )));
    }
    Ok(())
}

/// Root mean squared error.
pub fn rmse(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    check_paired(expected, predicted)?;
    let sum_sq: f64 = expected
        .iter()
        .zip(predicted.iter())
        .map(|(e, p)| (e - p) * (e - p))
        .sum();
    Ok((sum_sq / expected.len() as f64).sqrt())
}

/// Mean absolute error.
pub fn mae(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    check_paired(expected, predicted)?;
    let sum_abs: f64 = expected
        .iter()
        .zip(predicted.iter())
        .map(|(e, p)| (e - p).abs())
        .sum();
    Ok(sum_abs / expected.len() as f64)
}

/// Coefficient of determination: 1 - SS_res / SS_tot. Constant expected
/// values make SS_tot zero and the raw division result propagates.
pub fn r_squared(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    check_paired(expected, predicted)?;
    let mean = expected.iter().sum::<f64>() / expected.len() as f64;
    let ss_res: f64 = expected
        .iter()
        .zip(predicted.iter())
        .map(|(e, p)| (e - p) * (e - p))
        .sum();
    let ss_tot: f64 = expected.iter().map(|e| (e - mean) * (e - mean)).sum();
    Ok(1.0 - ss_res / ss_tot)
}

/// Sample standard deviation of the residuals (expected - predicted).
pub fn residual_stddev(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    check_paired(expected, predicted)?;
    let residuals: Vec<f64> = expected
        .iter()
        .zip(predicted.iter())
        .map(|(e, p)| e - p)
        .collect();
    let mean = residuals.iter().sum::<f64>() / residuals.len() as f64;
    let var = residuals.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>()
        / (residuals.len() as f64 - 1.0);
    Ok(var.sqrt())
}
