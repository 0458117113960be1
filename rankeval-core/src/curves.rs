//! Curve builders over rank-ordered score-label sequences.

use itertools::Itertools;

use crate::ranking::rank_order_by_score;
use crate::types::{count_actives, CurvePoint, Scorable};

/// Cumulative count of actives: element i is the number of positive labels
/// among the first i + 1 items. Precondition: `ranked` is already
/// rank-ordered.
pub fn cumulated_actives_curve<S: Scorable>(ranked: &[S]) -> Vec<u64> {
    let mut seen = 0u64;
    ranked
        .iter()
        .map(|sl| {
            if sl.label() {
                seen += 1;
            }
            seen
        })
        .collect()
}

/// ROC curve: (FPR, TPR) after each item of the rank-ordered sequence,
/// prefixed with the (0, 0) boundary point. Both coordinates are
/// non-decreasing by construction.
pub fn roc_curve<S: Scorable + Clone>(items: &[S]) -> Vec<CurvePoint> {
    let ranked = rank_order_by_score(items);
    let total_actives = count_actives(&ranked) as f64;
    let total_decoys = ranked.len() as f64 - total_actives;

    let mut points = Vec::with_capacity(ranked.len() + 1);
    points.push(CurvePoint { x: 0.0, y: 0.0 });
    let mut actives = 0u64;
    let mut decoys = 0u64;
    for sl in &ranked {
        if sl.label() {
            actives += 1;
        } else {
            decoys += 1;
        }
        points.push(CurvePoint {
            x: decoys as f64 / total_decoys,
            y: actives as f64 / total_actives,
        });
    }
    points
}

/// Precision-recall curve: one (recall, precision) point per distinct score
/// threshold, evaluated high to low, prefixed with the (0, 1) boundary point.
///
/// The partition at each threshold extends the previous one, so the sweep is
/// O(n) over all thresholds. With no actives in the input the recall
/// division is 0/0 and the raw NaN propagates; this follows the reference
/// behavior and is not guarded.
pub fn pr_curve<S: Scorable + Clone>(items: &[S]) -> Vec<CurvePoint> {
    let ranked = rank_order_by_score(items);
    let total_actives = count_actives(&ranked) as f64;
    let thresholds: Vec<f64> = ranked.iter().map(|sl| sl.score()).dedup().collect();

    let mut points = Vec::with_capacity(thresholds.len() + 1);
    points.push(CurvePoint { x: 0.0, y: 1.0 });
    let mut above = 0u64;
    let mut true_pos = 0u64;
    let mut idx = 0usize;
    for threshold in thresholds {
        while idx < ranked.len() && ranked[idx].score() >= threshold {
            if ranked[idx].label() {
                true_pos += 1;
            }
            above += 1;
            idx += 1;
        }
        points.push(CurvePoint {
            // TP / (TP + FN) and TP / (TP + FP)
            x: true_pos as f64 / total_actives,
            y: true_pos as f64 / above as f64,
        });
    }
    points
}
