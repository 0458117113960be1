use approx::AbsDiffEq;
use derive_more::TryInto;
use serde::{Deserialize, Serialize};

/// Scoring capability over an arbitrary record type.
///
/// The whole metrics engine is generic over this trait: anything that can
/// report a score and a ground-truth label can be ranked and evaluated.
/// Scores must be finite. A NaN score violates the total ordering the
/// ranking primitive relies on and the resulting rank order is unspecified.
pub trait Scorable {
    fn score(&self) -> f64;
    /// Ground truth. `true` marks the positive (active) class.
    fn label(&self) -> bool;
}

/// Plain (score, label) pair, the smallest `Scorable` instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel {
    pub score: f64,
    pub label: bool,
}

impl ScoredLabel {
    pub fn new(score: f64, label: bool) -> ScoredLabel {
        ScoredLabel { score, label }
    }
}

impl Scorable for ScoredLabel {
    fn score(&self) -> f64 {
        self.score
    }

    fn label(&self) -> bool {
        self.label
    }
}

impl From<(f64, bool)> for ScoredLabel {
    fn from((score, label): (f64, bool)) -> Self {
        ScoredLabel::new(score, label)
    }
}

impl Scorable for (f64, bool) {
    fn score(&self) -> f64 {
        self.0
    }

    fn label(&self) -> bool {
        self.1
    }
}

/// A named scored record, as produced by the tabular parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub name: String,
    pub score: f64,
    pub label: bool,
}

impl ScoredRecord {
    pub fn new(name: impl Into<String>, score: f64, label: bool) -> ScoredRecord {
        ScoredRecord {
            name: name.into(),
            score,
            label,
        }
    }
}

impl Scorable for ScoredRecord {
    fn score(&self) -> f64 {
        self.score
    }

    fn label(&self) -> bool {
        self.label
    }
}

/// One point of a ROC or precision-recall curve. Both coordinates are rates
/// in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for CurvePoint {
    fn from((x, y): (f64, f64)) -> Self {
        CurvePoint { x, y }
    }
}

impl AbsDiffEq for CurvePoint {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

/// Result of a registered metric.
// Untagged for succintness in result files
#[derive(Debug, Clone, Copy, PartialEq, TryInto, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Number of positive labels in a sequence.
pub fn count_actives<S: Scorable>(items: &[S]) -> u64 {
    items.iter().filter(|sl| sl.label()).count() as u64
}
