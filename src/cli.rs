use crate::config::AppConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "price-lens",
    version,
    about = "Search CSV price lists and compare prices per unit of weight"
)]
pub struct Cli {
    /// Path to the JSON config file.
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Directory with price lists (overrides the config).
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// HTML report path (overrides the config).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run a single search, export the report and exit.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(dir) = &self.dir {
            config.price_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.report_path = output.clone();
        }
        config
    }
}
