use crate::model::DiscoveryError;
use std::path::{Path, PathBuf};

pub trait Discovery {
    fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError>;
}
