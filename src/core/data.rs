//! Patient data source.
//!
//! The dispatcher has no opinion on where the profile and vitals come
//! from; it only needs the two typed shapes. The service loads them once
//! at startup from a JSON document and never mutates them afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{PatientProfile, VitalsRecord};

/// The read-only inputs every request shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSnapshot {
    pub profile: PatientProfile,
    pub vitals: Vec<VitalsRecord>,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read patient data file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse patient data file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait PatientDataSource {
    fn load(&self) -> Result<PatientSnapshot, DataError>;
}

/// Loads the snapshot from a JSON file on disk. Vitals are sorted by date
/// on load so "most recent" is always positional.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PatientDataSource for JsonFileSource {
    fn load(&self) -> Result<PatientSnapshot, DataError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut snapshot: PatientSnapshot =
            serde_json::from_str(&raw).map_err(|source| DataError::Parse {
                path: self.path.clone(),
                source,
            })?;
        snapshot.vitals.sort_by_key(|record| record.date);
        debug!(path = %self.path.display(), vitals = snapshot.vitals.len(), "loaded patient snapshot");
        Ok(snapshot)
    }
}
