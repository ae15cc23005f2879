//! JSON snapshot export.

use crate::error::ExportError;
use crate::record::Landmark;
use crate::stats::Statistics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything written by an export: records, their statistics, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub landmarks: Vec<Landmark>,
    pub statistics: Statistics,
    /// ISO-8601 / RFC 3339 in the serialized form
    pub export_date: DateTime<Utc>,
}

/// Serialize `snapshot` as pretty JSON at `path`, creating parent
/// directories as needed.
pub fn write_snapshot(path: &Path, snapshot: &ExportSnapshot) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).map_err(io_err)?;
    Ok(())
}
