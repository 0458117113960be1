use crate::error::{Error, Result};
use crate::ranking::rank_order_by_score;
use crate::types::Scorable;

/// alpha = 20.0 corresponds to 80% of the score being explained by the
/// first 8% of the rank-ordered list.
pub const DEFAULT_BEDROC_ALPHA: f64 = 20.0;

/// Robust initial enhancement: sum over actives of exp(-rank / a), with
/// 0-based ranks in an already rank-ordered sequence. Larger `a` flattens
/// the decay and weighs early ranks less.
pub fn fast_initial_enhancement<S: Scorable>(a: f64, ranked: &[S]) -> Result<f64> {
    if a <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "initial enhancement decay must be > 0: {a}"
        )));
    }
    Ok(ranked
        .iter()
        .enumerate()
        .filter(|(_, sl)| sl.label())
        .map(|(rank, _)| (-(rank as f64) / a).exp())
        .sum())
}

/// [`fast_initial_enhancement`] preceded by the rank-order sort.
pub fn initial_enhancement<S: Scorable + Clone>(a: f64, items: &[S]) -> Result<f64> {
    fast_initial_enhancement(a, &rank_order_by_score(items))
}

/// Boltzmann-enhanced discrimination of ROC over an already rank-ordered
/// sequence.
///
/// Cf. "Evaluating Virtual Screening Methods: Good and Bad Metrics for the
/// "Early Recognition" Problem", Truchon & Bayly, JCIM, 2007. The closed
/// form is reproduced exactly: an exponential sum over 1-based active ranks
/// scaled by two normalization factors plus an additive constant. A dataset
/// with no actives or no decoys makes the normalization singular and the
/// raw division result propagates; such input is a precondition violation.
pub fn fast_bedroc_auc<S: Scorable>(alpha: f64, ranked: &[S]) -> Result<f64> {
    if alpha <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "bedroc alpha must be > 0: {alpha}"
        )));
    }
    let total = ranked.len() as f64;
    let mut actives = 0u64;
    let mut sum = 0.0;
    for (rank, sl) in ranked.iter().enumerate() {
        if sl.label() {
            actives += 1;
            sum += (-alpha * (rank as f64 + 1.0) / total).exp();
        }
    }
    let r_a = actives as f64 / total;
    let factor1 = r_a * (alpha / 2.0).sinh()
        / ((alpha / 2.0).cosh() - (alpha / 2.0 - alpha * r_a).cosh());
    let factor2 = ((alpha / total).exp() - 1.0) / (r_a * (1.0 - (-alpha).exp()));
    let constant = 1.0 / (1.0 - (alpha * (1.0 - r_a)).exp());
    Ok(sum * factor1 * factor2 + constant)
}

/// [`fast_bedroc_auc`] preceded by the rank-order sort.
pub fn bedroc_auc<S: Scorable + Clone>(alpha: f64, items: &[S]) -> Result<f64> {
    fast_bedroc_auc(alpha, &rank_order_by_score(items))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::types::ScoredLabel;

    // 14 items, actives at 1-based ranks 1, 2, 4 and 9.
    fn fixture() -> Vec<ScoredLabel> {
        (0..14)
            .map(|i| ScoredLabel::new(14.0 - i as f64, matches!(i, 0 | 1 | 3 | 8)))
            .collect()
    }

    #[test]
    fn test_bedroc_rejects_non_positive_alpha() {
        assert!(bedroc_auc(0.0, &fixture()).is_err());
        assert!(bedroc_auc(-1.0, &fixture()).is_err());
    }

    #[test]
    fn test_bedroc_golden_value() {
        let value = bedroc_auc(DEFAULT_BEDROC_ALPHA, &fixture()).unwrap();
        assert_relative_eq!(value, 0.9561949215830693, epsilon = 1e-9);
    }

    #[test]
    fn test_bedroc_perfect_ranking_close_to_one() {
        let data: Vec<ScoredLabel> = (0..14)
            .map(|i| ScoredLabel::new(14.0 - i as f64, i < 4))
            .collect();
        let value = bedroc_auc(20.0, &data).unwrap();
        assert_relative_eq!(value, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bedroc_worst_ranking_close_to_zero() {
        let data: Vec<ScoredLabel> = (0..14)
            .map(|i| ScoredLabel::new(14.0 - i as f64, i >= 10))
            .collect();
        let value = bedroc_auc(20.0, &data).unwrap();
        assert_relative_eq!(value, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bedroc_fast_and_safe_forms_agree() {
        let mut shuffled = fixture();
        shuffled.reverse();
        let safe = bedroc_auc(20.0, &shuffled).unwrap();
        let fast = fast_bedroc_auc(20.0, &fixture()).unwrap();
        assert_eq!(safe, fast);
    }

    #[test]
    fn test_bedroc_all_actives_is_singular() {
        let data: Vec<ScoredLabel> = (0..5).map(|i| ScoredLabel::new(5.0 - i as f64, true)).collect();
        assert!(!bedroc_auc(20.0, &data).unwrap().is_finite());
    }

    #[test]
    fn test_initial_enhancement_golden_value() {
        let value = initial_enhancement(5.0, &fixture()).unwrap();
        assert_relative_eq!(value, 2.5694389071666635, epsilon = 1e-9);
    }

    #[test]
    fn test_initial_enhancement_rejects_non_positive_decay() {
        assert!(initial_enhancement(0.0, &fixture()).is_err());
    }

    #[test]
    fn test_initial_enhancement_fast_form_skips_sorting() {
        let ranked = fixture();
        assert_eq!(
            initial_enhancement(5.0, &ranked).unwrap(),
            fast_initial_enhancement(5.0, &ranked).unwrap()
        );
    }
}
