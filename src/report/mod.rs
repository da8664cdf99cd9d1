// Report module: console listings and the HTML export.

pub mod console;
pub mod html;

pub use console::write_results;
pub use html::export_html;
