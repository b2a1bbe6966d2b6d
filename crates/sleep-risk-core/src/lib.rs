pub mod category;
pub mod classifier;
pub mod error;
pub mod profile;
pub mod report;
pub mod thresholds;
pub mod vote;

pub use category::*;
pub use classifier::*;
pub use error::*;
pub use profile::*;
pub use report::*;
pub use thresholds::*;
pub use vote::*;
