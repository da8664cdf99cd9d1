// Core structs: Record, ColumnMapping, Diagnostic
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One normalized price-list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub product_name: String,
    pub unit_price: f64,
    pub weight: f64,
    pub source_file: String,
    pub price_per_weight: f64,
}

impl Record {
    /// Builds a record and caches the derived per-weight price.
    pub fn new(product_name: String, unit_price: f64, weight: f64, source_file: String) -> Self {
        Self {
            product_name,
            unit_price,
            weight,
            source_file,
            price_per_weight: unit_price / weight,
        }
    }
}

/// Semantic column categories a price list must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Product,
    Price,
    Weight,
}

impl Category {
    /// Accepted header spellings, compared after lower-casing.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Category::Product => &["название", "продукт", "товар", "наименование"],
            Category::Price => &["цена", "розница"],
            Category::Weight => &["фасовка", "масса", "вес"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Product => "product",
            Category::Price => "price",
            Category::Weight => "weight",
        };
        f.write_str(name)
    }
}

/// Zero-based column indices resolved from one file's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub product_index: usize,
    pub price_index: usize,
    pub weight_index: usize,
}

impl ColumnMapping {
    /// Smallest row length that covers every mapped column.
    pub fn required_len(&self) -> usize {
        self.product_index.max(self.price_index).max(self.weight_index) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no column for {0}")]
    ColumnNotFound(Category),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("{field} value '{value}' is not a number")]
    Unparsable { field: Category, value: String },
    #[error("row has {found} fields, expected at least {expected}")]
    MissingFields { expected: usize, found: usize },
    #[error("price {price} / weight {weight} is not a finite number")]
    NonFinite { price: f64, weight: f64 },
}

/// Non-fatal problem found while ingesting; the file or row is skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("{file}: required {category} column not found, file skipped")]
    ColumnNotFound { file: String, category: Category },
    #[error("{file}: row {line} {row:?} skipped: {reason}")]
    RowParse {
        file: String,
        line: u64,
        row: Vec<String>,
        reason: String,
    },
    #[error("{file}: unreadable, skipped: {reason}")]
    FileUnreadable { file: String, reason: String },
    #[error("{file}: empty file, skipped")]
    EmptyFile { file: String },
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no files containing '{marker}' with extension '{extension}' in {dir}")]
    NoMatchingFiles {
        dir: PathBuf,
        marker: String,
        extension: String,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Diagnostic {
    pub fn file(&self) -> &str {
        match self {
            Diagnostic::ColumnNotFound { file, .. }
            | Diagnostic::RowParse { file, .. }
            | Diagnostic::FileUnreadable { file, .. }
            | Diagnostic::EmptyFile { file } => file,
        }
    }
}
