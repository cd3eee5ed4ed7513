/// City name → coordinates lookup over the loaded city directory.
///
/// Matching is deliberately strict: exact equality after ASCII lowercasing
/// and whitespace trimming. No fuzzy matching, no partial matching — a miss
/// is a `CityNotFound` error carrying the caller's original input.

use crate::model::{CityRecord, RiskError};

/// Resolves a free-text city name to its (lat, lon) pair.
pub fn coords_for_city(cities: &[CityRecord], city_name: &str) -> Result<(f64, f64), RiskError> {
    let normalized = city_name.trim().to_lowercase();

    cities
        .iter()
        .find(|c| c.name.to_lowercase() == normalized)
        .map(|c| (c.lat, c.lon))
        .ok_or_else(|| RiskError::CityNotFound(city_name.to_string()))
}
