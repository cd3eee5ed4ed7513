/// Geographic primitives: great-circle distance and nearest-station
/// selection over the station directory.
///
/// Distances use the haversine formula on a spherical Earth (R = 6371 km),
/// which is accurate to well under 0.5% for the station spacings this
/// service deals with.

use crate::model::{RiskError, StationRecord};

/// Mean Earth radius, kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Great-circle distance in kilometers between two (lat, lon) points given
/// in degrees.
///
/// The atan2 form is numerically robust for both identical and antipodal
/// points, so there are no error cases.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

// ---------------------------------------------------------------------------
// Nearest station
// ---------------------------------------------------------------------------

/// Returns the station closest to the given point.
///
/// Linear scan over the directory; with tens of stations this is
/// microseconds, so no spatial index is warranted. On an exact distance
/// tie the station that appears first in directory order wins — the strict
/// `<` comparison below is what guarantees that, so load order of the
/// station directory is part of the observable contract.
pub fn nearest_station<'a>(
    lat: f64,
    lon: f64,
    stations: &'a [StationRecord],
) -> Result<&'a StationRecord, RiskError> {
    let mut best: Option<(&StationRecord, f64)> = None;

    for station in stations {
        let distance = haversine_km(lat, lon, station.lat, station.lon);
        match best {
            Some((_, best_distance)) if distance < best_distance => {
                best = Some((station, distance));
            }
            None => best = Some((station, distance)),
            _ => {}
        }
    }

    best.map(|(station, _)| station)
        .ok_or(RiskError::EmptyStationDirectory)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
