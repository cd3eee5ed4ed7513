/// Core data types for the flood/drought risk assessment service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only types and their serialized shapes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Reference record types
// ---------------------------------------------------------------------------

/// A single city in the city directory.
///
/// One entry in `city_data.json`. The name is the lookup key for geocoding;
/// matching is exact after ASCII lowercasing and whitespace trimming.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CityRecord {
    #[serde(rename = "city")]
    pub name: String,
    /// WGS84 latitude, degrees.
    pub lat: f64,
    /// WGS84 longitude, degrees.
    pub lon: f64,
}

/// A single river monitoring station in the station directory.
///
/// One entry in `station_data.json`. Thresholds are gauge water levels in
/// meters and must satisfy `danger_level > warning_level > 0`. Station names
/// need not be unique — nearest-station selection goes by coordinates only.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationRecord {
    #[serde(rename = "station_name")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Moderate flood cutoff, meters.
    pub warning_level: f64,
    /// High flood cutoff, meters.
    pub danger_level: f64,
}

impl StationRecord {
    /// Estimated normal water level for the station: 80% of warning level.
    /// Used both as the monsoon simulation floor and in the drought cutoff.
    pub fn base_level(&self) -> f64 {
        self.warning_level * 0.8
    }
}

// ---------------------------------------------------------------------------
// Assessment output types
// ---------------------------------------------------------------------------

/// Risk categories, from most severe flood condition to drought.
///
/// Serialized as the human-facing strings the API has always returned
/// ("High Flood Risk", …), so the enum is the single source of truth for
/// both classification and the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "High Flood Risk")]
    HighFlood,
    #[serde(rename = "Moderate Flood Risk")]
    ModerateFlood,
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Potential Drought Condition")]
    PotentialDrought,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::HighFlood => write!(f, "High Flood Risk"),
            RiskLevel::ModerateFlood => write!(f, "Moderate Flood Risk"),
            RiskLevel::LowRisk => write!(f, "Low Risk"),
            RiskLevel::PotentialDrought => write!(f, "Potential Drought Condition"),
        }
    }
}

/// Station details echoed back with every assessment.
///
/// Values are copied out of the matched `StationRecord` — an assessment
/// stays valid even if the reference snapshot is later replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    pub name: String,
    /// Simulated water level, meters, rounded to 2 decimals.
    pub current_level: f64,
    pub warning_level: f64,
    pub danger_level: f64,
}

/// The complete result of one risk assessment, in wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub reason: String,
    pub recommendation: String,
    pub station_info: StationInfo,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise during a risk assessment.
///
/// `CityNotFound` is a user input error (400-class at the HTTP boundary);
/// the empty-directory variants indicate missing or unreadable reference
/// data (500-class). Malformed reference files never surface here — the
/// loader logs them and degrades to an empty directory, which then shows
/// up as one of the empty variants on the first assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// No directory entry matched the given city name. Carries the
    /// original, non-normalized input for diagnostics.
    CityNotFound(String),
    /// The station directory has zero entries.
    EmptyStationDirectory,
    /// The city directory has zero entries.
    EmptyCityDirectory,
}

impl std::fmt::Display for RiskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskError::CityNotFound(city) => {
                write!(f, "Could not find coordinates for city: '{}'", city)
            }
            RiskError::EmptyStationDirectory => {
                write!(f, "River station data could not be loaded")
            }
            RiskError::EmptyCityDirectory => {
                write!(f, "City data could not be loaded")
            }
        }
    }
}

impl std::error::Error for RiskError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
