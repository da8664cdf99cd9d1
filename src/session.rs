// Interactive search loop
use crate::analyzer::search;
use crate::config::AppConfig;
use crate::model::ReportError;
use crate::report::{export_html, write_results};
use crate::storage::Dataset;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Report(#[from] ReportError),
}

pub struct Session<'a> {
    dataset: &'a Dataset,
    config: &'a AppConfig,
    /// Lower-cased, matching how queries are normalized.
    exit_command: String,
}

impl<'a> Session<'a> {
    pub fn new(dataset: &'a Dataset, config: &'a AppConfig) -> Self {
        Self {
            dataset,
            config,
            exit_command: config.exit_command.trim().to_lowercase(),
        }
    }

    /// Reads queries until the exit command or end of input, then exports the report.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<(), SessionError> {
        let mut line = String::new();
        loop {
            write!(
                out,
                "Enter text to search or '{}' to quit: ",
                self.config.exit_command
            )?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                debug!("End of input");
                break;
            }

            let query = line.trim().to_lowercase();
            if query == self.exit_command {
                break;
            }
            self.handle_query(&query, out)?;
        }

        writeln!(out, "Done.")?;
        export_html(self.dataset, &self.config.report_path)?;
        Ok(())
    }

    pub fn handle_query<W: Write>(&self, query: &str, out: &mut W) -> io::Result<()> {
        let results = search(self.dataset, query);
        info!(query, results = results.len(), "Search");
        write_results(out, &results, self.config.name_width)
    }
}
