use crate::error::{Error, Result};
use crate::ranking::rank_order_by_score;
use crate::types::{count_actives, Scorable};

/// Power metric at a fractional cutoff, over an already rank-ordered
/// sequence: TPR_x / (TPR_x + FPR_x) with x = round(cutoff * N). A robust
/// alternative to the plain enrichment factor at small cutoffs.
///
/// The cutoff must lie in (0, 1] and select at least one item. A dataset
/// with no actives or no decoys leaves a 0/0 in the rates and the raw
/// result propagates; such input is a precondition violation.
pub fn fast_power_metric<S: Scorable>(cutoff: f64, ranked: &[S]) -> Result<f64> {
    if !(cutoff > 0.0 && cutoff <= 1.0) {
        return Err(Error::InvalidArgument(format!(
            "power metric cutoff must be in (0, 1]: {cutoff}"
        )));
    }
    let total = ranked.len();
    let x = (cutoff * total as f64).round() as usize;
    if x == 0 {
        return Err(Error::InvalidArgument(format!(
            "power metric cutoff {cutoff} selects no items out of {total}"
        )));
    }
    let total_actives = count_actives(ranked);
    let total_decoys = total as u64 - total_actives;
    let true_pos = count_actives(&ranked[..x]);

    let tpr = true_pos as f64 / total_actives as f64;
    let fpr = (x - true_pos as usize) as f64 / total_decoys as f64;
    Ok(tpr / (tpr + fpr))
}

/// [`fast_power_metric`] preceded by the rank-order sort.
pub fn power_metric<S: Scorable + Clone>(cutoff: f64, items: &[S]) -> Result<f64> {
    fast_power_metric(cutoff, &rank_order_by_score(items))
}
