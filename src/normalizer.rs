use crate::model::{Category, ColumnMapping, Record, RowError};

/// Turns one raw data row into a [`Record`].
///
/// `Ok(None)` means a required field is blank: the row carries no data and is
/// dropped without a diagnostic. Malformed rows come back as [`RowError`].
pub fn normalize_row<S: AsRef<str>>(
    row: &[S],
    mapping: &ColumnMapping,
    source_file: &str,
) -> Result<Option<Record>, RowError> {
    let expected = mapping.required_len();
    if row.len() < expected {
        return Err(RowError::MissingFields {
            expected,
            found: row.len(),
        });
    }

    let product = row[mapping.product_index].as_ref().trim();
    let price = row[mapping.price_index].as_ref().trim();
    let weight = row[mapping.weight_index].as_ref().trim();

    if product.is_empty() || price.is_empty() || weight.is_empty() {
        return Ok(None);
    }

    let price = parse_number(price, Category::Price)?;
    let weight = parse_number(weight, Category::Weight)?;

    if !price.is_finite() || !weight.is_finite() || !(price / weight).is_finite() {
        return Err(RowError::NonFinite { price, weight });
    }

    Ok(Some(Record::new(
        product.to_string(),
        price,
        weight,
        source_file.to_string(),
    )))
}

fn parse_number(value: &str, field: Category) -> Result<f64, RowError> {
    value.parse::<f64>().map_err(|_| RowError::Unparsable {
        field,
        value: value.to_string(),
    })
}
