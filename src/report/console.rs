use crate::model::Record;
use crate::utils::{basename, truncate_chars};
use std::io::{self, Write};

pub const NOT_FOUND: &str = "No products found.";

/// One numbered result line; the name is cut or padded to `name_width`.
pub fn format_line(index: usize, record: &Record, name_width: usize) -> String {
    format!(
        "{:>3}. {:<width$} {:>10.2} {:>5.2} {:<20} {:>10.2}",
        index,
        truncate_chars(&record.product_name, name_width),
        record.unit_price,
        record.weight,
        basename(&record.source_file),
        record.price_per_weight,
        width = name_width,
    )
}

pub fn write_results<W: Write>(out: &mut W, results: &[&Record], name_width: usize) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "{}", NOT_FOUND);
    }
    for (i, record) in results.iter().enumerate() {
        writeln!(out, "{}", format_line(i + 1, record, name_width))?;
    }
    Ok(())
}
