mod auc;
mod bedroc;
mod enrichment;
mod mcc;
mod metric_registry;
mod power_metric;

pub use auc::*;
pub use bedroc::*;
pub use enrichment::*;
pub use mcc::*;
pub use metric_registry::*;
pub use power_metric::*;
