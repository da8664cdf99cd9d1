// Parser module: header resolution and per-file CSV parsing.

pub mod header;
pub mod price_list;

pub use price_list::{ParsedFile, PriceListParser};
