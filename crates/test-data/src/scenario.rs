//! Fluent builder for constructing walk scenarios.

use std::time::Instant;

use eva::{EvaError, SlopeProfile, Telemetry, WalkConfig, simulate};
use rand::Rng;

use crate::config::{ScenarioConfig, Site, SiteTerrain};
use crate::traverse::TraverseGenerator;

/// Result of building a scenario.
#[derive(Debug)]
pub struct ScenarioResult {
    /// Configuration the scenario was built from.
    pub config: ScenarioConfig,
    /// Generated slope profile.
    pub profile: SlopeProfile,
    /// Walk telemetry produced by the profile.
    pub telemetry: Telemetry,
    /// Metrics from scenario generation (populated if metrics tracking enabled).
    pub metrics: Option<ScenarioMetrics>,
}

/// Performance metrics from scenario generation.
#[derive(Debug, Clone)]
pub struct ScenarioMetrics {
    /// Time spent generating and walking the profile (milliseconds).
    pub generation_time_ms: u64,
    /// Number of slope steps generated.
    pub step_count: usize,
    /// Simulated walk duration in seconds.
    pub walk_duration_s: f64,
}

/// Builder for creating complete walk scenarios.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::new()
///     .with_site(Site::HADLEY)
///     .with_traverse_distance(3000.0)
///     .with_payload(65.0)
///     .with_tank(400.0)
///     .build_data(&mut rng)?;
/// ```
pub struct ScenarioBuilder {
    // Terrain configuration
    terrain: SiteTerrain,
    traverse_distance_m: f64,
    sample_spacing_m: f64,
    jitter_std_dev_m: f64,

    // Walk configuration
    payload_kg: f64,
    tank_l: f64,

    // Misc
    seed: u32,
    track_metrics: bool,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a new scenario builder with default settings.
    pub fn new() -> Self {
        Self {
            terrain: Site::TAURUS_LITTROW,
            traverse_distance_m: 2000.0,
            sample_spacing_m: 5.0,
            jitter_std_dev_m: 0.3,
            payload_kg: 50.0,
            tank_l: 500.0,
            seed: 42,
            track_metrics: false,
        }
    }

    /// Sets the terrain of the traverse site.
    pub fn with_site(mut self, terrain: SiteTerrain) -> Self {
        self.terrain = terrain;
        self
    }

    /// Sets the traverse length in meters.
    pub fn with_traverse_distance(mut self, meters: f64) -> Self {
        self.traverse_distance_m = meters;
        self
    }

    /// Sets the terrain sample spacing in meters.
    pub fn with_sample_spacing(mut self, meters: f64) -> Self {
        self.sample_spacing_m = meters;
        self
    }

    /// Sets the elevation jitter standard deviation (0 disables jitter).
    pub fn with_elevation_jitter(mut self, std_dev_m: f64) -> Self {
        self.jitter_std_dev_m = std_dev_m;
        self
    }

    /// Sets the carried weight in kilograms.
    pub fn with_payload(mut self, kilograms: f64) -> Self {
        self.payload_kg = kilograms;
        self
    }

    /// Sets the oxygen tank capacity in liters.
    pub fn with_tank(mut self, liters: f64) -> Self {
        self.tank_l = liters;
        self
    }

    /// Sets the terrain seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Enables metrics tracking for performance analysis.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Builds the scenario: generates a slope profile and walks it.
    pub fn build_data(&self, rng: &mut impl Rng) -> Result<ScenarioResult, EvaError> {
        let start_time = if self.track_metrics {
            Some(Instant::now())
        } else {
            None
        };

        let generator = TraverseGenerator::new(self.terrain, self.seed)
            .with_distance(self.traverse_distance_m)
            .with_spacing(self.sample_spacing_m)
            .with_jitter(self.jitter_std_dev_m);
        let profile = generator.generate(rng);

        let walk = WalkConfig {
            payload_kg: self.payload_kg,
            tank_l: self.tank_l,
        };
        let telemetry = simulate(&profile, &walk)?;

        let metrics = start_time.map(|start| ScenarioMetrics {
            generation_time_ms: start.elapsed().as_millis() as u64,
            step_count: profile.len(),
            walk_duration_s: telemetry.summary.duration_s,
        });

        Ok(ScenarioResult {
            config: self.scenario_config(),
            profile,
            telemetry,
            metrics,
        })
    }

    fn scenario_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            terrain: self.terrain,
            traverse_distance_m: self.traverse_distance_m,
            sample_spacing_m: self.sample_spacing_m,
            payload_kg: self.payload_kg,
            tank_l: self.tank_l,
            seed: self.seed,
        }
    }
}

/// Preset scenarios for common fixture needs.
impl ScenarioBuilder {
    /// A routine geology walk on the valley floor.
    ///
    /// - Moderate terrain with a full sample kit carried
    /// - Tank sized so the walk ends with ample margin
    pub fn nominal_traverse() -> Self {
        Self::new()
            .with_site(Site::TAURUS_LITTROW)
            .with_traverse_distance(2000.0)
            .with_payload(60.0)
            .with_tank(500.0)
    }

    /// A long crossing of a flat mare plain.
    ///
    /// - Gentle slopes, so speed stays near its level-ground value
    /// - Useful as a near-constant-rate baseline
    pub fn mare_crossing() -> Self {
        Self::new()
            .with_site(Site::MARE_TRANQUILLITATIS)
            .with_traverse_distance(6000.0)
    }

    /// A walk that exhausts its tank partway through.
    ///
    /// - Heavy payload and a deliberately undersized tank
    /// - Exercises depletion detection and post-depletion telemetry
    pub fn depletion_drill() -> Self {
        Self::new()
            .with_site(Site::TAURUS_LITTROW)
            .with_traverse_distance(3000.0)
            .with_payload(80.0)
            .with_tank(5.0)
    }

    /// A rugged crater-rim traverse with metrics tracking.
    ///
    /// - Steep polar terrain pushes speed toward its low end
    /// - Metrics enabled for generation performance analysis
    pub fn polar_rim_stress_test() -> Self {
        Self::new()
            .with_site(Site::SHACKLETON_RIM)
            .with_traverse_distance(4000.0)
            .with_payload(70.0)
            .with_tank(800.0)
            .with_metrics(true)
    }
}
