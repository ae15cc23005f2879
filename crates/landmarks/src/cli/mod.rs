//! CLI command implementations

pub mod config;
pub mod error;
pub mod export;
pub mod list;
pub mod nearby;
pub mod output;
pub mod perf;
pub mod report;

use anyhow::Result;
use config::Settings;
use error::HelpfulError;
use landmarks_catalog::dataset;
use landmarks_catalog::{Catalog, DatasetError, Landmark};
use std::path::PathBuf;
use tracing::info;

/// Where to read landmarks from.
#[derive(Debug, Clone, clap::Args)]
pub struct DataArgs {
    /// Landmark JSON file (array of records or an export snapshot).
    /// Falls back to `default_data` in config.toml, then the built-in sample.
    #[arg(short = 'd', long = "data", env = "LANDMARKS_DATA")]
    pub data: Option<PathBuf>,
}

impl DataArgs {
    fn resolve(&self, settings: &Settings) -> Option<PathBuf> {
        self.data.clone().or_else(|| settings.default_data.clone())
    }
}

/// Read landmarks without validating them.
pub fn read_landmarks(args: &DataArgs, settings: &Settings) -> Result<Vec<Landmark>> {
    let Some(path) = args.resolve(settings) else {
        info!("no data file given, using built-in sample");
        return Ok(dataset::sample_landmarks());
    };

    let landmarks = dataset::load_landmarks(&path).map_err(|err| match err {
        DatasetError::Io { ref path, .. } if !path.exists() => HelpfulError::data_not_found(path),
        DatasetError::Io { .. } => HelpfulError::new(err.to_string()),
        DatasetError::Parse { ref path, ref source } => HelpfulError::invalid_data(path, source),
    })?;
    info!(path = %path.display(), count = landmarks.len(), "landmarks loaded");
    Ok(landmarks)
}

/// Read landmarks and offer each one to a fresh catalog.
pub fn load_catalog(args: &DataArgs, settings: &Settings) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    catalog.extend(read_landmarks(args, settings)?);
    Ok(catalog)
}

/// Print the catalog's error log to stderr, if any.
pub fn print_rejections(catalog: &Catalog) {
    if catalog.errors().is_empty() {
        return;
    }
    eprintln!();
    eprintln!("Errors:");
    for error in catalog.errors() {
        eprintln!("  ! {}", error);
    }
}
