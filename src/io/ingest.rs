//! CSV ingestion of the stop list.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::PlanError;
use crate::models::{Point, PointSet};

/// Required columns, each with the header names accepted for it.
const REQUIRED_COLUMNS: [(&str, &[&str]); 6] = [
    ("id", &["id"]),
    ("name", &["name", "nom"]),
    ("latitude", &["latitude", "lat"]),
    ("longitude", &["longitude", "lon"]),
    ("demand", &["demand", "positions"]),
    ("delivery_date", &["delivery_date", "date_livraison"]),
];

#[derive(Debug, Deserialize)]
struct PointRow {
    id: usize,
    #[serde(alias = "nom")]
    name: String,
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon")]
    longitude: f64,
    #[serde(alias = "positions")]
    demand: Option<u32>,
    #[serde(alias = "date_livraison")]
    delivery_date: String,
}

impl PointRow {
    fn into_point(self) -> Result<Point, PlanError> {
        let demand = match self.demand {
            Some(d) => d,
            None if self.id == crate::models::DEPOT_ID => 0,
            None => {
                return Err(PlanError::MissingField {
                    id: self.id,
                    field: "demand",
                })
            }
        };
        Ok(Point::new(
            self.id,
            self.name,
            self.latitude,
            self.longitude,
            demand,
            self.delivery_date,
        ))
    }
}

fn missing_columns(headers: &StringRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|(_, accepted)| !headers.iter().any(|h| accepted.contains(&h)))
        .map(|(canonical, _)| (*canonical).to_string())
        .collect()
}

/// Reads a point set from CSV with a header row.
///
/// Columns may use either the canonical names (`id, name, latitude,
/// longitude, demand, delivery_date`) or the legacy ones (`nom, lat, lon,
/// positions, date_livraison`). Extra columns are ignored. The depot row may
/// leave `demand` blank.
///
/// # Examples
///
/// ```
/// use u_savings::io::read_point_set;
///
/// let csv = "id,name,latitude,longitude,demand,delivery_date\n\
///            0,Depot,36.80,10.18,,\n\
///            1,Client A,36.85,10.20,4,12/03/2025\n";
/// let points = read_point_set(csv.as_bytes()).unwrap();
/// assert_eq!(points.num_clients(), 1);
/// ```
pub fn read_point_set<R: Read>(reader: R) -> Result<PointSet, PlanError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(PlanError::MissingColumns(missing));
    }
    debug!(columns = headers.len(), "validated input headers");

    let mut points = Vec::new();
    for row in rdr.deserialize::<PointRow>() {
        points.push(row?.into_point()?);
    }

    let set = PointSet::new(points)?;
    info!(clients = set.num_clients(), "loaded point set");
    Ok(set)
}

/// Reads a point set from a CSV file on disk.
pub fn load_point_set(path: impl AsRef<Path>) -> Result<PointSet, PlanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_point_set(file)
}
