use crate::types::Scorable;

/// Matthews correlation coefficient at a fixed score threshold, in [-1, 1].
///
/// Items scoring at or above the threshold are predicted positive. When the
/// denominator of the MCC formula is zero (one class absent from the
/// predictions or the ground truth) the published convention is to return
/// 0.0 instead of propagating the singularity; this is the one deliberate
/// deviation from the raw-division behavior of the other metrics.
pub fn mcc<S: Scorable>(threshold: f64, items: &[S]) -> f64 {
    let mut true_pos = 0.0f64;
    let mut true_neg = 0.0f64;
    let mut false_pos = 0.0f64;
    let mut false_neg = 0.0f64;
    for sl in items {
        match (sl.score() >= threshold, sl.label()) {
            (true, true) => true_pos += 1.0,
            (true, false) => false_pos += 1.0,
            (false, true) => false_neg += 1.0,
            (false, false) => true_neg += 1.0,
        }
    }
    let denominator = ((true_pos + false_pos)
        * (true_pos + false_neg)
        * (true_neg + false_pos)
        * (true_neg + false_neg))
        .sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        (true_pos * true_neg - false_pos * false_neg) / denominator
    }
}
