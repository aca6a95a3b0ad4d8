mod rating;
mod stats;

pub use rating::*;
pub use stats::*;
