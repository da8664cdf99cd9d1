// Header row resolution against the fixed synonym tables
use crate::model::{Category, ColumnMapping, ResolveError};
use tracing::warn;

/// Lower-cased, trimmed header value used for synonym matching.
fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Index of the first header belonging to `category`.
fn find_column(normalized: &[String], category: Category) -> Result<usize, ResolveError> {
    let synonyms = category.synonyms();
    let mut matches = normalized
        .iter()
        .enumerate()
        .filter(|(_, h)| synonyms.contains(&h.as_str()))
        .map(|(i, _)| i);

    let first = matches.next().ok_or(ResolveError::ColumnNotFound(category))?;
    let extra: Vec<usize> = matches.collect();
    if !extra.is_empty() {
        warn!(
            category = %category,
            used = first,
            ignored = ?extra,
            "Ambiguous header: several columns match, using the first"
        );
    }
    Ok(first)
}

/// Resolves which columns hold product name, price and weight.
pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<ColumnMapping, ResolveError> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h.as_ref())).collect();

    Ok(ColumnMapping {
        product_index: find_column(&normalized, Category::Product)?,
        price_index: find_column(&normalized, Category::Price)?,
        weight_index: find_column(&normalized, Category::Weight)?,
    })
}
