// Analyzer module: queries and summary statistics over the dataset.

pub mod search;
pub mod stats;

pub use search::search;
pub use stats::DatasetStats;
