/// Risk assessment pipeline: city name → RiskAssessment.
///
/// Glues the per-stage modules together in a fixed order:
/// directory presence checks, geocoding, nearest-station selection,
/// seasonal level simulation, classification. Every stage is a pure
/// function over the immutable snapshot plus the caller's level source,
/// so concurrent assessments need no locking.

use chrono::{Datelike, Utc};

use crate::classify;
use crate::directory::ReferenceSnapshot;
use crate::geo;
use crate::geocode;
use crate::model::{RiskAssessment, RiskError};
use crate::simulate::{self, WaterLevelSource};

/// Runs a full assessment for the current UTC calendar month.
pub fn assess_city(
    snapshot: &ReferenceSnapshot,
    city: &str,
    source: &mut dyn WaterLevelSource,
) -> Result<RiskAssessment, RiskError> {
    assess_city_at_month(snapshot, city, Utc::now().month(), source)
}

/// Month-parameterized assessment. The seasonal simulation depends on the
/// calendar month, so tests pin it here instead of the wall clock.
pub fn assess_city_at_month(
    snapshot: &ReferenceSnapshot,
    city: &str,
    month: u32,
    source: &mut dyn WaterLevelSource,
) -> Result<RiskAssessment, RiskError> {
    // Reference data presence is checked up front so a config problem
    // reports as such rather than as an unknown city.
    if snapshot.stations.is_empty() {
        return Err(RiskError::EmptyStationDirectory);
    }
    if snapshot.cities.is_empty() {
        return Err(RiskError::EmptyCityDirectory);
    }

    let (lat, lon) = geocode::coords_for_city(&snapshot.cities, city)?;
    let station = geo::nearest_station(lat, lon, &snapshot.stations)?;
    let level = simulate::simulate_level(station, month, source);

    Ok(classify::classify(station, level))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CityRecord, RiskLevel, StationRecord};
    use crate::simulate::RandomLevels;

    struct FixedLevel(f64);

    impl WaterLevelSource for FixedLevel {
        fn level_between(&mut self, _lo: f64, _hi: f64) -> f64 {
            self.0
        }
    }

    fn snapshot() -> ReferenceSnapshot {
        ReferenceSnapshot::from_records(
            vec![CityRecord {
                name: "Testville".to_string(),
                lat: 20.0,
                lon: 80.0,
            }],
            vec![
                StationRecord {
                    name: "S1".to_string(),
                    lat: 20.01,
                    lon: 80.01,
                    warning_level: 10.0,
                    danger_level: 15.0,
                },
                StationRecord {
                    name: "S2".to_string(),
                    lat: 25.0,
                    lon: 85.0,
                    warning_level: 8.0,
                    danger_level: 12.0,
                },
            ],
        )
    }

    #[test]
    fn test_pipeline_selects_nearest_station() {
        let snap = snapshot();
        let result = assess_city_at_month(&snap, "testville", 7, &mut FixedLevel(9.0)).unwrap();
        assert_eq!(result.station_info.name, "S1");
    }

    #[test]
    fn test_forced_high_level_classifies_high_flood() {
        let snap = snapshot();
        let result = assess_city_at_month(&snap, "Testville", 7, &mut FixedLevel(16.0)).unwrap();
        assert_eq!(result.risk_level, RiskLevel::HighFlood);
        assert_eq!(result.station_info.current_level, 16.0);
        assert_eq!(result.station_info.warning_level, 10.0);
        assert_eq!(result.station_info.danger_level, 15.0);
    }

    #[test]
    fn test_empty_station_directory_reported_before_geocoding() {
        let snap = ReferenceSnapshot::from_records(snapshot().cities, Vec::new());
        // Even an unknown city reports the missing reference data first.
        let err = assess_city_at_month(&snap, "Nowhereville", 7, &mut FixedLevel(9.0)).unwrap_err();
        assert_eq!(err, RiskError::EmptyStationDirectory);
    }

    #[test]
    fn test_empty_city_directory_is_distinct_from_city_not_found() {
        let snap = ReferenceSnapshot::from_records(Vec::new(), snapshot().stations);
        let err = assess_city_at_month(&snap, "Testville", 7, &mut FixedLevel(9.0)).unwrap_err();
        assert_eq!(err, RiskError::EmptyCityDirectory);
    }

    #[test]
    fn test_unknown_city_propagates_not_found() {
        let snap = snapshot();
        let err = assess_city_at_month(&snap, "Nowhereville", 7, &mut FixedLevel(9.0)).unwrap_err();
        assert_eq!(err, RiskError::CityNotFound("Nowhereville".to_string()));
    }

    #[test]
    fn test_seeded_assessment_is_deterministic() {
        let snap = snapshot();
        let a =
            assess_city_at_month(&snap, "Testville", 8, &mut RandomLevels::with_seed(7)).unwrap();
        let b =
            assess_city_at_month(&snap, "Testville", 8, &mut RandomLevels::with_seed(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wall_clock_entry_point_runs() {
        let snap = snapshot();
        let result = assess_city(&snap, "Testville", &mut RandomLevels::with_seed(1)).unwrap();
        assert_eq!(result.station_info.name, "S1");
    }
}
