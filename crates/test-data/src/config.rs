//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// Terrain character of a landing site, as noise-field parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SiteTerrain {
    /// Site datum elevation in meters (lunar reference radius).
    pub base_elevation_m: f64,
    /// Relief amplitude in meters around the datum.
    pub relief_m: f64,
    /// Spatial frequency in 1/m (controls terrain wavelength).
    pub frequency: f64,
    /// Number of noise octaves for small-scale detail.
    pub octaves: u32,
}

impl SiteTerrain {
    pub const fn new(base_elevation_m: f64, relief_m: f64, frequency: f64, octaves: u32) -> Self {
        Self {
            base_elevation_m,
            relief_m,
            frequency,
            octaves,
        }
    }
}

/// Pre-defined lunar sites for traverse generation.
#[derive(Debug, Clone, Copy)]
pub struct Site;

impl Site {
    /// Taurus-Littrow valley floor - rolling sculptured hills between massifs.
    pub const TAURUS_LITTROW: SiteTerrain = SiteTerrain::new(-2500.0, 120.0, 0.002, 4);

    /// Hadley plain - moderate relief near the rille edge.
    pub const HADLEY: SiteTerrain = SiteTerrain::new(-1800.0, 80.0, 0.0015, 3);

    /// Mare Tranquillitatis - nearly flat basaltic plain.
    pub const MARE_TRANQUILLITATIS: SiteTerrain = SiteTerrain::new(-1400.0, 15.0, 0.001, 2);

    /// Shackleton crater rim - severe polar relief.
    pub const SHACKLETON_RIM: SiteTerrain = SiteTerrain::new(1300.0, 350.0, 0.004, 5);
}

/// Configuration for a generated walk scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Terrain parameters for the site being walked.
    pub terrain: SiteTerrain,

    /// Traverse length in meters.
    pub traverse_distance_m: f64,

    /// Spacing between terrain samples in meters.
    pub sample_spacing_m: f64,

    /// Carried weight in kilograms, suit included.
    pub payload_kg: f64,

    /// Oxygen tank capacity in liters.
    pub tank_l: f64,

    /// Terrain seed, recorded so a fixture can be regenerated.
    pub seed: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            terrain: Site::TAURUS_LITTROW,
            traverse_distance_m: 2000.0,
            sample_spacing_m: 5.0,
            payload_kg: 50.0,
            tank_l: 500.0,
            seed: 42,
        }
    }
}
