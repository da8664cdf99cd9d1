use crate::storage::Dataset;
use std::collections::HashSet;

/// Summary of the loaded dataset, computed over price per weight.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub records: usize,
    pub files: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl DatasetStats {
    pub fn calculate(dataset: &Dataset) -> Self {
        let records = dataset.records();
        let files = records
            .iter()
            .map(|r| r.source_file.as_str())
            .collect::<HashSet<_>>()
            .len();

        if records.is_empty() {
            return Self {
                records: 0,
                files,
                min: None,
                max: None,
                mean: None,
            };
        }

        let values = records.iter().map(|r| r.price_per_weight);
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.sum::<f64>() / records.len() as f64;

        Self {
            records: records.len(),
            files,
            min: Some(min),
            max: Some(max),
            mean: Some(mean),
        }
    }
}
