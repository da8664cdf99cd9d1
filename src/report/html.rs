// HTML export of the whole dataset
use crate::model::ReportError;
use crate::storage::Dataset;
use crate::utils::{basename, escape_html};
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders every record as a table row, cheapest per weight first.
pub fn render_html(dataset: &Dataset, generated_at: DateTime<Local>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Products</title>\n\
         </head>\n\
         <body>\n\
         <table>\n\
         <tr>\n\
         <th>No.</th><th>Name</th><th>Price</th><th>Weight</th><th>File</th><th>Price per kg</th>\n\
         </tr>\n",
    );

    for (idx, record) in dataset.sorted_by_price_per_weight().iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td><td>{:.2}</td></tr>",
            idx + 1,
            escape_html(&record.product_name),
            record.unit_price,
            record.weight,
            escape_html(basename(&record.source_file)),
            record.price_per_weight,
        );
    }

    let _ = write!(
        html,
        "</table>\n<p>Generated {}</p>\n</body>\n</html>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    html
}

pub fn export_html(dataset: &Dataset, path: &Path) -> Result<(), ReportError> {
    let html = render_html(dataset, Local::now());
    fs::write(path, html).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), rows = dataset.len(), "Report exported");
    Ok(())
}
