/// Seasonal water level simulation.
///
/// Produces a plausible current water level for a station from its
/// thresholds and the calendar month. This is a bounded random draw, not a
/// forecast — it has no memory of prior calls and no hydrological input.
///
/// Monsoon months (June–September) draw high, up to 5% above the danger
/// level; the dry season (April–May) draws well below the normal level;
/// remaining months draw a mid band that never reaches the warning level.
///
/// The random source is injectable so tests can pin the outcome: production
/// code uses entropy-backed `RandomLevels`, tests use a seed or a fixed
/// value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::StationRecord;

// ---------------------------------------------------------------------------
// Level sources
// ---------------------------------------------------------------------------

/// Source of uniform draws for the simulation. Implementations must return
/// a value in `[lo, hi]`.
pub trait WaterLevelSource {
    fn level_between(&mut self, lo: f64, hi: f64) -> f64;
}

/// The production level source, backed by `StdRng`.
pub struct RandomLevels {
    rng: StdRng,
}

impl RandomLevels {
    /// Entropy-seeded source for production use.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomLevels {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterLevelSource for RandomLevels {
    fn level_between(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.gen_range(lo..=hi)
    }
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Simulates the current water level at a station for the given calendar
/// month (1–12), rounded to 2 decimal places.
pub fn simulate_level(
    station: &StationRecord,
    month: u32,
    source: &mut dyn WaterLevelSource,
) -> f64 {
    let base_level = station.base_level();

    let level = match month {
        6..=9 => source.level_between(base_level, station.danger_level * 1.05),
        4..=5 => source.level_between(base_level * 0.6, base_level * 0.9),
        _ => source.level_between(base_level * 0.8, station.warning_level * 0.95),
    };

    round2(level)
}

/// Rounds to 2 decimal places, matching the precision the API reports.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
