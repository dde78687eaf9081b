//! Cumulative on-disk route history.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{Reader, Writer};
use tracing::{info, warn};

use super::report::RouteRecord;
use crate::error::PlanError;

/// Append-only history of every route ever planned, stored as CSV.
///
/// # Examples
///
/// ```no_run
/// use u_savings::io::RouteHistory;
///
/// let history = RouteHistory::new("data/routes.csv");
/// let previous = history.load().unwrap();
/// println!("{} routes on record", previous.len());
/// ```
#[derive(Debug, Clone)]
pub struct RouteHistory {
    path: PathBuf,
}

impl RouteHistory {
    /// Creates a history backed by the given CSV file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every recorded route; a missing file is an empty history.
    pub fn load(&self) -> Result<Vec<RouteRecord>, PlanError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = Reader::from_path(&self.path)?;
        rdr.deserialize()
            .collect::<Result<Vec<RouteRecord>, _>>()
            .map_err(PlanError::from)
    }

    /// Appends records after the existing history and rewrites the file.
    ///
    /// The parent directory is created if needed. An existing file that
    /// cannot be parsed is replaced by the new records.
    pub fn append(&self, records: &[RouteRecord]) -> Result<PathBuf, PlanError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| PlanError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let mut combined = match self.load() {
            Ok(existing) => existing,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding unreadable history");
                Vec::new()
            }
        };
        let previous = combined.len();
        combined.extend_from_slice(records);

        let mut wtr = Writer::from_path(&self.path)?;
        for record in &combined {
            wtr.serialize(record)?;
        }
        wtr.flush().map_err(|source| PlanError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(
            path = %self.path.display(),
            previous,
            appended = records.len(),
            "saved route history"
        );
        Ok(self.path.clone())
    }
}
