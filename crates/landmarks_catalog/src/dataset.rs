//! Loading landmark files.
//!
//! Accepts either a bare JSON array of landmarks or an export snapshot, so a
//! file written by [`Catalog::export_json`](crate::Catalog::export_json) can
//! be read back. Records are not validated here; offer them to a catalog.

use crate::error::DatasetError;
use crate::record::Landmark;
use serde::Deserialize;
use std::fs;
use std::path::Path;

// Only the records are read back; statistics and export_date are recomputed.
#[derive(Deserialize)]
struct SnapshotFile {
    landmarks: Vec<Landmark>,
}

/// Parse landmarks from JSON text.
///
/// A top-level object is read as a snapshot, anything else as a record array,
/// so a bad record surfaces serde's own field and position in the error.
pub fn parse_landmarks(json: &str) -> Result<Vec<Landmark>, serde_json::Error> {
    if json.trim_start().starts_with('{') {
        let snapshot: SnapshotFile = serde_json::from_str(json)?;
        Ok(snapshot.landmarks)
    } else {
        serde_json::from_str(json)
    }
}

/// Read and parse a landmark file.
pub fn load_landmarks(path: &Path) -> Result<Vec<Landmark>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_landmarks(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Built-in St. Petersburg landmarks, used when no data file is given.
pub fn sample_landmarks() -> Vec<Landmark> {
    vec![
        Landmark::new("land_001", "Mendeleev Memorial", 59.9311, 30.3644, 1834, "monument", 5)
            .with_description("Monument to the greatest Russian chemist")
            .with_scientists(["Dmitri Mendeleev"]),
        Landmark::new("land_002", "Science Laboratory", 59.9395, 30.3161, 1925, "synthesis", 4)
            .with_description("Birthplace of chemistry revolution")
            .with_scientists(["Ivan Pavlov", "Nikolay Beketov"]),
        Landmark::new("land_003", "Academy of Sciences", 59.9311, 30.3850, 1775, "discovery", 5)
            .with_description("First major scientific discoveries center")
            .with_scientists(["Mikhail Lomonosov"]),
    ]
}
