use crate::error::{Error, Result};
use crate::ranking::rank_order_by_score;
use crate::types::{count_actives, Scorable};

/// Enrichment factor over an already rank-ordered sequence: the rate of
/// actives among the top round(p * N) items divided by the overall active
/// rate. A dataset with no actives makes the ratio 0/0 and the raw NaN
/// propagates; such input is a precondition violation.
pub fn fast_enrichment_factor<S: Scorable>(p: f64, ranked: &[S]) -> Result<f64> {
    if !(p > 0.0 && p <= 1.0) {
        return Err(Error::InvalidArgument(format!(
            "enrichment fraction must be in (0, 1]: {p}"
        )));
    }
    let total = ranked.len();
    let top = (p * total as f64).round() as usize;
    if top == 0 {
        return Err(Error::InvalidArgument(format!(
            "enrichment fraction {p} selects no items out of {total}"
        )));
    }
    let top_rate = count_actives(&ranked[..top]) as f64 / top as f64;
    let total_rate = count_actives(ranked) as f64 / total as f64;
    Ok(top_rate / total_rate)
}

/// [`fast_enrichment_factor`] preceded by the rank-order sort. The fast
/// variant is worth it when probing several fractions of one dataset.
pub fn enrichment_factor<S: Scorable + Clone>(p: f64, items: &[S]) -> Result<f64> {
    fast_enrichment_factor(p, &rank_order_by_score(items))
}
