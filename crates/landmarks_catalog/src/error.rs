use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a landmark was refused. The display text is what lands in the
/// catalog's error log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationFailure {
    #[error("Invalid latitude: {0:?}")]
    Latitude(f64),
    #[error("Invalid longitude: {0:?}")]
    Longitude(f64),
    #[error("Invalid importance level: {0}")]
    Importance(i32),
    #[error("Invalid year: {0}")]
    Year(i32),
}

impl ValidationFailure {
    /// Name of the offending field, as it appears in serialized records.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationFailure::Latitude(_) => "latitude",
            ValidationFailure::Longitude(_) => "longitude",
            ValidationFailure::Importance(_) => "importance_level",
            ValidationFailure::Year(_) => "year_discovered",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
