// CSV price-list parsing: header resolution followed by row normalization
use crate::model::{Diagnostic, Record, ResolveError};
use crate::normalizer::normalize_row;
use crate::parser::header::resolve;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Everything one file contributed: its records plus what was skipped.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub records: Vec<Record>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedFile {
    fn skipped(diagnostic: Diagnostic) -> Self {
        warn!("{}", diagnostic);
        Self {
            records: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }
}

pub trait Parser {
    fn parse<R: Read>(&self, input: R, source: &str) -> ParsedFile;
}

pub struct PriceListParser;

impl PriceListParser {
    pub fn new() -> Self {
        Self
    }

    /// Opens `path` and parses it; the handle is released before returning.
    pub fn parse_path(&self, path: &Path) -> ParsedFile {
        let source = path.display().to_string();
        match File::open(path) {
            Ok(file) => self.parse(file, &source),
            Err(e) => ParsedFile::skipped(Diagnostic::FileUnreadable {
                file: source,
                reason: e.to_string(),
            }),
        }
    }
}

impl Parser for PriceListParser {
    fn parse<R: Read>(&self, input: R, source: &str) -> ParsedFile {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        let mut rows = reader.byte_records();

        let headers = match rows.next() {
            None => {
                return ParsedFile::skipped(Diagnostic::EmptyFile {
                    file: source.to_string(),
                });
            }
            Some(Err(e)) => {
                return ParsedFile::skipped(Diagnostic::FileUnreadable {
                    file: source.to_string(),
                    reason: e.to_string(),
                });
            }
            Some(Ok(headers)) => headers,
        };

        let headers: Vec<String> = headers.iter().map(lossy).collect();
        let mapping = match resolve(&headers) {
            Ok(mapping) => mapping,
            Err(ResolveError::ColumnNotFound(category)) => {
                return ParsedFile::skipped(Diagnostic::ColumnNotFound {
                    file: source.to_string(),
                    category,
                });
            }
        };
        debug!(file = source, ?mapping, "Resolved columns");

        let mut parsed = ParsedFile::default();
        // Header is line 1; the fallback only matters when the reader has no position.
        let mut fallback_line = 1;

        for row in rows {
            fallback_line += 1;
            let row = match row {
                Ok(row) => row,
                Err(e) if e.is_io_error() => {
                    let diagnostic = Diagnostic::FileUnreadable {
                        file: source.to_string(),
                        reason: e.to_string(),
                    };
                    warn!("{}", diagnostic);
                    parsed.diagnostics.push(diagnostic);
                    break;
                }
                Err(e) => {
                    let line = e.position().map_or(fallback_line, |p| p.line());
                    let diagnostic = Diagnostic::RowParse {
                        file: source.to_string(),
                        line,
                        row: Vec::new(),
                        reason: e.to_string(),
                    };
                    warn!("{}", diagnostic);
                    parsed.diagnostics.push(diagnostic);
                    continue;
                }
            };
            let line = row.position().map_or(fallback_line, |p| p.line());

            let row = match StringRecord::from_byte_record(row) {
                Ok(row) => row,
                Err(e) => {
                    let diagnostic = Diagnostic::RowParse {
                        file: source.to_string(),
                        line,
                        reason: e.utf8_error().to_string(),
                        row: e.into_byte_record().iter().map(lossy).collect(),
                    };
                    warn!("{}", diagnostic);
                    parsed.diagnostics.push(diagnostic);
                    continue;
                }
            };

            let fields: Vec<&str> = row.iter().collect();
            match normalize_row(&fields, &mapping, source) {
                Ok(Some(record)) => parsed.records.push(record),
                Ok(None) => {}
                Err(e) => {
                    let diagnostic = Diagnostic::RowParse {
                        file: source.to_string(),
                        line,
                        row: fields.iter().map(|f| f.to_string()).collect(),
                        reason: e.to_string(),
                    };
                    warn!("{}", diagnostic);
                    parsed.diagnostics.push(diagnostic);
                }
            }
        }

        debug!(
            file = source,
            records = parsed.records.len(),
            skipped = parsed.diagnostics.len(),
            "Parsed price list"
        );
        parsed
    }
}

fn lossy(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse_str(content: &str) -> ParsedFile {
        PriceListParser::new().parse(content.as_bytes(), "shop_price.csv")
    }

    #[test]
    fn test_parse_scenario_a() {
        let parsed = parse_str("товар,цена,фасовка\nMilk,50.0,1.0\n");
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.records.len(), 1);
        let record = &parsed.records[0];
        assert_eq!(record.product_name, "Milk");
        assert_eq!(record.unit_price, 50.0);
        assert_eq!(record.weight, 1.0);
        assert_eq!(record.price_per_weight, 50.0);
        assert_eq!(record.source_file, "shop_price.csv");
    }

    #[test]
    fn test_parse_scenario_b_blank_price() {
        let parsed = parse_str("название,розница,вес\nBread,,0.5\n");
        assert!(parsed.records.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_parse_scenario_c_bad_price() {
        let parsed = parse_str("наименование,цена,масса\nSugar,abc,1.0\nSalt,20,0.5\n");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].product_name, "Salt");
        assert_eq!(parsed.diagnostics.len(), 1);
        match &parsed.diagnostics[0] {
            Diagnostic::RowParse { file, line, row, .. } => {
                assert_eq!(file, "shop_price.csv");
                assert_eq!(*line, 2);
                assert_eq!(row, &vec!["Sugar".to_string(), "abc".into(), "1.0".into()]);
            }
            other => panic!("unexpected diagnostic: {other:?}"),
        }
    }

    #[test]
    fn test_parse_scenario_e_missing_weight_column() {
        let parsed = parse_str("товар,цена\nMilk,50\n");
        assert!(parsed.records.is_empty());
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::ColumnNotFound {
                file: "shop_price.csv".into(),
                category: Category::Weight,
            }]
        );
    }

    #[test]
    fn test_parse_keeps_row_order_and_quoted_fields() {
        let parsed = parse_str(
            "артикул,товар,вес,цена\n1,\"Cheese, hard\",0.25,300\n2,Butter,0.2,180\n",
        );
        let names: Vec<_> = parsed.records.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["Cheese, hard", "Butter"]);
        assert_eq!(parsed.records[0].price_per_weight, 1200.0);
    }

    #[test]
    fn test_parse_short_row_is_diagnosed() {
        let parsed = parse_str("товар,цена,вес\nMilk,50\nKefir,60,1\n");
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.diagnostics.len(), 1);
        assert!(matches!(parsed.diagnostics[0], Diagnostic::RowParse { line: 2, .. }));
    }

    #[test]
    fn test_parse_invalid_utf8_row_is_diagnosed() {
        let input: &[u8] = b"\xd1\x82\xd0\xbe\xd0\xb2\xd0\xb0\xd1\x80,\xd1\x86\xd0\xb5\xd0\xbd\xd0\xb0,\xd0\xb2\xd0\xb5\xd1\x81\nBad\xff,1,1\nTea,2,1\n";
        let parsed = PriceListParser::new().parse(input, "shop_price.csv");

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].product_name, "Tea");
        assert_eq!(parsed.diagnostics.len(), 1);
        match &parsed.diagnostics[0] {
            Diagnostic::RowParse { line, row, .. } => {
                assert_eq!(*line, 2);
                assert_eq!(row, &vec!["Bad\u{fffd}".to_string(), "1".into(), "1".into()]);
            }
            other => panic!("unexpected diagnostic: {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_str("");
        assert!(parsed.records.is_empty());
        assert!(matches!(parsed.diagnostics[..], [Diagnostic::EmptyFile { .. }]));
    }

    #[test]
    fn test_parse_header_only() {
        let parsed = parse_str("товар,цена,вес\n");
        assert!(parsed.records.is_empty());
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_parse_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\u{feff}Продукт,Цена,Масса\nTea,250,0.1\n").unwrap();
        let parsed = PriceListParser::new().parse_path(file.path());
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].price_per_weight, 2500.0);
        assert_eq!(parsed.records[0].source_file, file.path().display().to_string());
    }

    #[test]
    fn test_parse_path_missing_file() {
        let parsed = PriceListParser::new().parse_path(Path::new("/nonexistent/price.csv"));
        assert!(parsed.records.is_empty());
        assert!(matches!(parsed.diagnostics[..], [Diagnostic::FileUnreadable { .. }]));
    }
}
