/// Reference data loading for the city and station directories.
///
/// Both directories live in static JSON files (paths come from service
/// configuration) and are loaded exactly once at startup into an immutable
/// `ReferenceSnapshot` that is passed by reference into the pipeline. Hot
/// reload, if ever needed, means building a new snapshot and swapping the
/// `Arc` — entries are never mutated in place.
///
/// A missing or malformed file is an operational condition, not a crash:
/// the affected directory loads as empty (logged), and the first assessment
/// against it surfaces `EmptyStationDirectory` / `EmptyCityDirectory`. The
/// rest of the service keeps running.

use std::fs;
use std::path::Path;

use crate::logging::{self, Component};
use crate::model::{CityRecord, StationRecord};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Immutable view of both reference directories.
///
/// Record order within each Vec is file order — for stations this is an
/// observable contract (the nearest-station tie-break).
#[derive(Debug, Clone)]
pub struct ReferenceSnapshot {
    pub cities: Vec<CityRecord>,
    pub stations: Vec<StationRecord>,
}

impl ReferenceSnapshot {
    /// Loads both directories. Never fails — see module docs.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(city_path: P, station_path: Q) -> Self {
        Self {
            cities: load_records(city_path.as_ref(), "city directory"),
            stations: load_records(station_path.as_ref(), "station directory"),
        }
    }

    /// Builds a snapshot directly from records. Test and tooling entry
    /// point; production code goes through `load`.
    pub fn from_records(cities: Vec<CityRecord>, stations: Vec<StationRecord>) -> Self {
        Self { cities, stations }
    }
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Loads a JSON array of records, degrading to empty on any failure.
fn load_records<T: serde::de::DeserializeOwned>(path: &Path, label: &str) -> Vec<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            logging::warn(
                Component::Loader,
                &format!(
                    "{} not readable at {} ({}); loading empty directory",
                    label,
                    path.display(),
                    e
                ),
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&contents) {
        Ok(records) => {
            logging::info(
                Component::Loader,
                &format!("loaded {} entries from {}", records.len(), path.display()),
            );
            records
        }
        Err(e) => {
            logging::error(
                Component::Loader,
                &format!(
                    "{} at {} is malformed ({}); loading empty directory",
                    label,
                    path.display(),
                    e
                ),
            );
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
