use crate::model::{Diagnostic, Record};
use crate::parser::{ParsedFile, PriceListParser};
use std::path::Path;
use tracing::info;

/// Append-only collection of records in ingestion order (file order, then row order).
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn append(&mut self, records: Vec<Record>) {
        self.records.extend(records);
    }

    /// All records ordered by ascending price per weight; ties keep ingestion order.
    pub fn sorted_by_price_per_weight(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.price_per_weight.total_cmp(&b.price_per_weight));
        sorted
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Parses every file in order and gathers the records and diagnostics.
///
/// A file that cannot be read or lacks a required column is skipped; the
/// remaining files are still processed.
pub fn ingest<P: AsRef<Path>>(files: &[P], parser: &PriceListParser) -> (Dataset, Vec<Diagnostic>) {
    let mut dataset = Dataset::new();
    let mut diagnostics = Vec::new();

    for file in files {
        let ParsedFile {
            records,
            diagnostics: file_diagnostics,
        } = parser.parse_path(file.as_ref());
        info!(
            file = %file.as_ref().display(),
            records = records.len(),
            diagnostics = file_diagnostics.len(),
            "Loaded price list"
        );
        dataset.append(records);
        diagnostics.extend(file_diagnostics);
    }

    (dataset, diagnostics)
}
