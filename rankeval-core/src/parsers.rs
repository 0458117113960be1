mod tabular;
pub use tabular::*;
