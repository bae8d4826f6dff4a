/// Records, datasets and partition helpers
pub mod dataset;
/// CSV loading
pub mod reader;
