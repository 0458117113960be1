use itertools::Itertools;

use crate::curves::pr_curve;
use crate::ranking::rank_order_by_score;
use crate::types::Scorable;

/// ROC AUC over an already rank-ordered sequence, without materializing the
/// curve.
///
/// Single fold maintaining running false/true positive counts. A trapezoid
/// slice is flushed only when the score value changes, so all items sharing
/// a score count as one step; that is the correct handling of ties. The area
/// is normalized by totalNegatives x totalPositives. A dataset with no
/// positives or no negatives makes that normalization a division by zero and
/// the raw result propagates; such input is a precondition violation.
pub fn fast_auc<S: Scorable>(ranked: &[S]) -> f64 {
    let mut false_pos = 0u64;
    let mut true_pos = 0u64;
    let mut false_pos_prev = 0u64;
    let mut true_pos_prev = 0u64;
    let mut area = 0.0;
    let mut prev_score = f64::INFINITY;

    for sl in ranked {
        let score = sl.score();
        if score != prev_score {
            area += trapezoid(false_pos, false_pos_prev, true_pos, true_pos_prev);
            prev_score = score;
            false_pos_prev = false_pos;
            true_pos_prev = true_pos;
        }
        if sl.label() {
            true_pos += 1;
        } else {
            false_pos += 1;
        }
    }
    area += trapezoid(false_pos, false_pos_prev, true_pos, true_pos_prev);
    area / (false_pos as f64 * true_pos as f64)
}

/// ROC AUC of an unordered sequence: [`fast_auc`] preceded by the
/// rank-order sort.
pub fn auc<S: Scorable + Clone>(items: &[S]) -> f64 {
    fast_auc(&rank_order_by_score(items))
}

/// Area under the precision-recall curve, by trapezoidal integration of its
/// points. The curve is already threshold-deduplicated, so no tie handling
/// is needed here.
pub fn pr_auc<S: Scorable + Clone>(items: &[S]) -> f64 {
    pr_curve(items)
        .iter()
        .tuple_windows()
        .map(|(a, b)| (b.x - a.x) * (a.y + b.y) / 2.0)
        .sum()
}

fn trapezoid(x1: u64, x2: u64, y1: u64, y2: u64) -> f64 {
    (x1 as f64 - x2 as f64).abs() * (y1 as f64 + y2 as f64) / 2.0
}
