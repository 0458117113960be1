use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::eval_config::EvalConfig;
use crate::metrics::{
    fast_auc, fast_bedroc_auc, fast_enrichment_factor, fast_initial_enhancement,
    fast_power_metric, mcc, pr_auc,
};
use crate::types::{count_actives, MetricValue, ScoredLabel};

/// A registered metric. The slice must already be rank-ordered; callers
/// sort once and evaluate as many metrics as they like.
pub type MetricFn = fn(&[ScoredLabel], &EvalConfig) -> Result<MetricValue>;

static METRIC_REGISTRY: Lazy<BTreeMap<&'static str, MetricFn>> = Lazy::new(|| {
    let mut registry: BTreeMap<&'static str, MetricFn> = BTreeMap::new();
    registry.insert("auc", |ranked, _| Ok(MetricValue::Float(fast_auc(ranked))));
    registry.insert("pr_auc", |ranked, _| Ok(MetricValue::Float(pr_auc(ranked))));
    registry.insert("bedroc", |ranked, config| {
        fast_bedroc_auc(config.bedroc_alpha, ranked).map(MetricValue::Float)
    });
    registry.insert("enrichment_factor", |ranked, config| {
        fast_enrichment_factor(config.enrichment_fraction, ranked).map(MetricValue::Float)
    });
    registry.insert("initial_enhancement", |ranked, config| {
        fast_initial_enhancement(config.initial_enhancement_decay, ranked)
            .map(MetricValue::Float)
    });
    registry.insert("power_metric", |ranked, config| {
        fast_power_metric(config.power_metric_cutoff, ranked).map(MetricValue::Float)
    });
    registry.insert("mcc", |ranked, config| {
        Ok(MetricValue::Float(mcc(config.mcc_threshold, ranked)))
    });
    registry.insert("actives", |ranked, _| {
        Ok(MetricValue::Int(count_actives(ranked) as i64))
    });
    registry.insert("count", |ranked, _| Ok(MetricValue::Int(ranked.len() as i64)));
    registry
});

pub fn get_metric(name: &str) -> Option<MetricFn> {
    METRIC_REGISTRY.get(name).copied()
}

pub fn metric_names() -> impl Iterator<Item = &'static str> {
    METRIC_REGISTRY.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::rank_order_by_score;
    use crate::types::ScoredLabel;

    #[test]
    fn test_unknown_metric_is_none() {
        assert!(get_metric("f1").is_none());
    }

    #[test]
    fn test_registry_evaluates_over_ranked_slice() {
        let data: Vec<ScoredLabel> = [(0.9, true), (0.7, true), (0.5, false), (0.1, false)]
            .into_iter()
            .map(Into::into)
            .collect();
        let ranked = rank_order_by_score(&data);
        let config = EvalConfig::default();

        let auc_fn = get_metric("auc").unwrap();
        assert_eq!(auc_fn(&ranked, &config).unwrap(), MetricValue::Float(1.0));

        let count_fn = get_metric("count").unwrap();
        assert_eq!(count_fn(&ranked, &config).unwrap(), MetricValue::Int(4));

        let actives_fn = get_metric("actives").unwrap();
        assert_eq!(actives_fn(&ranked, &config).unwrap(), MetricValue::Int(2));
    }

    #[test]
    fn test_configured_metric_reports_domain_errors() {
        let data: Vec<ScoredLabel> = vec![(0.9, true).into()];
        let config = EvalConfig {
            bedroc_alpha: -3.0,
            ..Default::default()
        };
        let bedroc_fn = get_metric("bedroc").unwrap();
        assert!(bedroc_fn(&data, &config).is_err());
    }

    #[test]
    fn test_metric_names_are_sorted_and_complete() {
        let names: Vec<&str> = metric_names().collect();
        assert_eq!(
            names,
            vec![
                "actives",
                "auc",
                "bedroc",
                "count",
                "enrichment_factor",
                "initial_enhancement",
                "mcc",
                "power_metric",
                "pr_auc",
            ]
        );
    }
}
