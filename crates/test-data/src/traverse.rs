//! Slope-profile generation from synthetic terrain.

use eva::constants::KMH_TO_MPS;
use eva::{SlopeProfile, SlopeStep, walking_speed};
use rand::Rng;

use crate::config::SiteTerrain;
use crate::terrain::{ElevationField, add_elevation_jitter};

/// Walking speed floor in m/s when deriving step durations.
///
/// Near-vertical synthetic terrain pushes the speed model toward zero; the
/// floor keeps generated step durations finite. Applies to profile
/// generation only, never inside the speed model.
const MIN_SPEED_MPS: f64 = 0.05;

/// Generates slope profiles by marching an elevation field.
///
/// The generator samples terrain elevation at a fixed spacing along the
/// traverse line, turns each segment's rise into a slope angle, and derives
/// how long the walker holds that slope from the walking-speed model
/// (segment run over speed). The result is a [`SlopeProfile`] whose step
/// durations vary with the terrain.
#[derive(Debug, Clone)]
pub struct TraverseGenerator {
    elevation: ElevationField,
    /// Traverse length in meters.
    distance_m: f64,
    /// Spacing between terrain samples in meters.
    spacing_m: f64,
    /// Gaussian jitter applied to each elevation sample, in meters.
    jitter_std_dev_m: f64,
}

impl TraverseGenerator {
    /// Creates a generator for a site's terrain.
    pub fn new(terrain: SiteTerrain, seed: u32) -> Self {
        Self {
            elevation: ElevationField::new(terrain, seed),
            distance_m: 2000.0,
            spacing_m: 5.0,
            jitter_std_dev_m: 0.3,
        }
    }

    /// Sets the traverse length.
    pub fn with_distance(mut self, meters: f64) -> Self {
        self.distance_m = meters;
        self
    }

    /// Sets the terrain sample spacing. Must be positive; a zero spacing
    /// makes the segment count unbounded.
    pub fn with_spacing(mut self, meters: f64) -> Self {
        self.spacing_m = meters;
        self
    }

    /// Sets the elevation jitter (0 disables it).
    pub fn with_jitter(mut self, std_dev_m: f64) -> Self {
        self.jitter_std_dev_m = std_dev_m;
        self
    }

    /// Sets the elevation field.
    pub fn with_elevation(mut self, elevation: ElevationField) -> Self {
        self.elevation = elevation;
        self
    }

    /// Generates the slope profile for the traverse.
    pub fn generate(&self, rng: &mut impl Rng) -> SlopeProfile {
        let count = (self.distance_m / self.spacing_m).ceil().max(1.0) as usize;

        let mut steps = Vec::with_capacity(count);
        let mut prev_elevation = self.sample(0.0, rng);

        for i in 0..count {
            let start_m = i as f64 * self.spacing_m;
            // Only the final segment can come up short
            let end_m = ((i + 1) as f64 * self.spacing_m).min(self.distance_m);
            let run_m = end_m - start_m;

            let next_elevation = self.sample(end_m, rng);
            let grade = (next_elevation - prev_elevation) / run_m;
            let slope_angle_deg = grade.atan().to_degrees();

            let speed = walking_speed(slope_angle_deg);
            let speed_mps = (speed.speed_kmh * KMH_TO_MPS).max(MIN_SPEED_MPS);
            let duration_s = run_m / speed_mps;

            steps.push(SlopeStep {
                slope_angle_deg,
                duration_s,
            });

            prev_elevation = next_elevation;
        }

        SlopeProfile::new(steps)
    }

    fn sample(&self, distance_m: f64, rng: &mut impl Rng) -> f64 {
        let elevation = self.elevation.elevation_at(distance_m);
        if self.jitter_std_dev_m > 0.0 {
            add_elevation_jitter(elevation, rng, self.jitter_std_dev_m)
        } else {
            elevation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Site;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_profile_covers_traverse() {
        let mut rng = StdRng::seed_from_u64(42);
        let profile = TraverseGenerator::new(Site::TAURUS_LITTROW, 42).generate(&mut rng);

        // 2000 m at 5 m spacing
        assert_eq!(profile.len(), 400);
        for step in &profile.steps {
            assert!(step.duration_s > 0.0 && step.duration_s.is_finite());
            assert!(step.slope_angle_deg.abs() < 90.0);
        }
    }

    #[test]
    fn test_uneven_tail_segment() {
        let mut rng = StdRng::seed_from_u64(42);
        let profile = TraverseGenerator::new(Site::HADLEY, 1)
            .with_distance(12.0)
            .generate(&mut rng);
        assert_eq!(profile.len(), 3);
    }

    #[test]
    fn test_durations_follow_the_speed_model() {
        let generator = TraverseGenerator::new(Site::TAURUS_LITTROW, 42)
            .with_distance(100.0)
            .with_jitter(0.0);
        let profile = generator.generate(&mut StdRng::seed_from_u64(1));

        // Every step holds its slope for exactly as long as the speed model
        // says the 5 m segment takes
        for step in &profile.steps {
            let speed = walking_speed(step.slope_angle_deg);
            let speed_mps = (speed.speed_kmh * KMH_TO_MPS).max(MIN_SPEED_MPS);
            assert_eq!(step.duration_s, 5.0 / speed_mps);
        }
    }

    #[test]
    fn test_deterministic_given_seeds() {
        let first = TraverseGenerator::new(Site::SHACKLETON_RIM, 9)
            .generate(&mut StdRng::seed_from_u64(5));
        let second = TraverseGenerator::new(Site::SHACKLETON_RIM, 9)
            .generate(&mut StdRng::seed_from_u64(5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_jitter_ignores_rng() {
        let generator = TraverseGenerator::new(Site::TAURUS_LITTROW, 11).with_jitter(0.0);
        let first = generator.generate(&mut StdRng::seed_from_u64(1));
        let second = generator.generate(&mut StdRng::seed_from_u64(999));
        assert_eq!(first, second);
    }

    #[test]
    fn test_flat_site_stays_gentle() {
        let mut rng = StdRng::seed_from_u64(42);
        let profile = TraverseGenerator::new(Site::MARE_TRANQUILLITATIS, 42)
            .with_jitter(0.0)
            .generate(&mut rng);

        for step in &profile.steps {
            assert!(
                step.slope_angle_deg.abs() < 20.0,
                "mare terrain should stay gentle, got {} degrees",
                step.slope_angle_deg
            );
        }
    }
}
