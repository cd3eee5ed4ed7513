/// riskmon_service: city-based flood/drought risk assessment service.
///
/// # Module structure
///
/// ```text
/// riskmon_service
/// ├── model     — shared data types (CityRecord, StationRecord, RiskAssessment, RiskError)
/// ├── config    — service configuration loader (riskmon.toml + env overrides)
/// ├── logging   — leveled logger (console + optional file)
/// ├── directory — reference data loader (city_data.json / station_data.json snapshots)
/// ├── geocode   — city name → coordinates (exact, case-insensitive)
/// ├── geo       — haversine distance + nearest-station selection
/// ├── simulate  — seasonal water level simulation (injectable randomness)
/// ├── classify  — water level → risk category decision table
/// ├── assess    — pipeline orchestration (city → RiskAssessment)
/// └── endpoint  — HTTP JSON API (tiny_http)
/// ```

/// Public modules
pub mod assess;
pub mod classify;
pub mod config;
pub mod directory;
pub mod endpoint;
pub mod geo;
pub mod geocode;
pub mod logging;
pub mod model;
pub mod simulate;
