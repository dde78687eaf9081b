//! Error taxonomy for a planning run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading stops, planning routes, or writing history.
///
/// Capacity infeasibility and empty input are not errors: an over-capacity
/// client ships alone and a point set without clients yields no routes.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The point set contains no points at all.
    #[error("point set is empty")]
    EmptyPointSet,
    /// No point with id 0 was supplied.
    #[error("depot (id 0) is missing from the point set")]
    MissingDepot,
    /// Two points share the same id.
    #[error("duplicate point id {0}")]
    DuplicateId(usize),
    /// Latitude or longitude is out of range or not finite.
    #[error("point {id} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Offending point id.
        id: usize,
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
    /// The input table lacks one or more required columns.
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    /// A row leaves a required field blank.
    #[error("point {id} is missing required field '{field}'")]
    MissingField {
        /// Point id of the offending row.
        id: usize,
        /// Canonical column name.
        field: &'static str,
    },
    /// A point id was requested that the point set does not contain.
    #[error("unknown point id {0}")]
    UnknownPoint(usize),
    /// Vehicle capacity must be strictly positive.
    #[error("vehicle capacity must be positive, got {0}")]
    InvalidCapacity(u32),
    /// Malformed CSV content.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Filesystem failure on a known path.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl PlanError {
    /// Returns `true` for errors caused by the shape of the input data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPointSet
                | Self::MissingDepot
                | Self::DuplicateId(_)
                | Self::InvalidCoordinate { .. }
                | Self::MissingColumns(_)
                | Self::MissingField { .. }
                | Self::Csv(_)
        )
    }
}
