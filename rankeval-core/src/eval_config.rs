use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_default::DefaultFromSerde;

use crate::error::{Error, Result};
use crate::metrics::DEFAULT_BEDROC_ALPHA;

/// Parameters of the configurable metrics. One instance drives a whole
/// evaluation run; the per-metric functions stay free of global state.
#[derive(Deserialize, DefaultFromSerde, Serialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct EvalConfig {
    #[serde(default = "default_bedroc_alpha")]
    pub bedroc_alpha: f64,

    /// Fraction of the ranked list examined by the enrichment factor.
    #[serde(default = "default_enrichment_fraction")]
    pub enrichment_fraction: f64,

    /// Exponential decay length of the initial enhancement.
    #[serde(default = "default_initial_enhancement_decay")]
    pub initial_enhancement_decay: f64,

    #[serde(default = "default_power_metric_cutoff")]
    pub power_metric_cutoff: f64,

    /// Score threshold separating predicted positives from negatives.
    #[serde(default = "default_mcc_threshold")]
    pub mcc_threshold: f64,
}

const fn default_bedroc_alpha() -> f64 {
    DEFAULT_BEDROC_ALPHA
}

const fn default_enrichment_fraction() -> f64 {
    0.05
}

const fn default_initial_enhancement_decay() -> f64 {
    5.0
}

const fn default_power_metric_cutoff() -> f64 {
    0.1
}

const fn default_mcc_threshold() -> f64 {
    0.5
}

impl EvalConfig {
    pub fn create_from_json(json: &str) -> Result<EvalConfig> {
        serde_json::from_str(json).map_err(|e| {
            Error::InvalidConfiguration(format!("Failed to parse configuration: {e}"))
        })
    }

    pub fn create_from_yaml(yaml: &str) -> Result<EvalConfig> {
        let json_from_yaml = serde_yaml::from_str::<serde_json::Value>(yaml)
            .map_err(|e| Error::InvalidConfiguration(format!("Failed to parse yaml: {e}")))?;
        serde_json::from_value(json_from_yaml).map_err(|e| {
            Error::InvalidConfiguration(format!("Failed to parse configuration: {e}"))
        })
    }
}

/// JSON schema of [`EvalConfig`], for editor tooling and the CLI.
pub fn config_schema() -> RootSchema {
    schema_for!(EvalConfig)
}
