// Storage module: the in-memory dataset and its ingestion.

pub mod dataset;

pub use dataset::{Dataset, ingest};
