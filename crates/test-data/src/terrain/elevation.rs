//! Perlin noise-based elevation synthesis.

use noise::{NoiseFn, Perlin};
use rand::Rng;

use crate::config::{Site, SiteTerrain};

/// Synthetic elevation field along a traverse line.
///
/// The field uses multiple octaves of Perlin noise (fractal Brownian
/// motion) over the one-dimensional traverse distance, so elevation depends
/// only on how far along the line a point sits. The same site parameters
/// and seed always produce the same terrain.
#[derive(Debug, Clone)]
pub struct ElevationField {
    perlin: Perlin,
    terrain: SiteTerrain,
}

impl ElevationField {
    /// Creates a field with a site's terrain character.
    pub fn new(terrain: SiteTerrain, seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            terrain,
        }
    }

    /// Creates a field for the Taurus-Littrow valley floor.
    pub fn taurus_littrow(seed: u32) -> Self {
        Self::new(Site::TAURUS_LITTROW, seed)
    }

    /// Creates a field for severe polar crater-rim relief.
    pub fn shackleton_rim(seed: u32) -> Self {
        Self::new(Site::SHACKLETON_RIM, seed)
    }

    /// Returns the terrain parameters the field was built with.
    pub fn terrain(&self) -> &SiteTerrain {
        &self.terrain
    }

    /// Elevation in meters at a distance along the traverse.
    ///
    /// Uses fractal Brownian motion for natural-looking relief: each octave
    /// contributes half the amplitude at double the frequency.
    pub fn elevation_at(&self, distance_m: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.terrain.frequency;
        let mut max_amplitude = 0.0;

        for _ in 0..self.terrain.octaves {
            // Second coordinate held off-lattice: the field is 1-D along
            // the traverse line
            let noise_val = self.perlin.get([distance_m * frequency, 0.5]);
            total += noise_val * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        // Normalize to -1..1, then scale onto the site datum
        let normalized = total / max_amplitude;
        self.terrain.base_elevation_m + normalized * self.terrain.relief_m
    }

    /// Samples the field every `spacing_m` meters out to `distance_m`.
    ///
    /// Returns one elevation per sample point, both endpoints included; the
    /// final sample lands exactly at `distance_m` even when the spacing
    /// does not divide it. `spacing_m` must be positive.
    pub fn sample_line(&self, distance_m: f64, spacing_m: f64) -> Vec<f64> {
        let count = (distance_m / spacing_m).ceil().max(1.0) as usize;
        let mut samples = Vec::with_capacity(count + 1);
        for i in 0..=count {
            let d = (i as f64 * spacing_m).min(distance_m);
            samples.push(self.elevation_at(d));
        }
        samples
    }
}

/// Adds gaussian measurement jitter to an elevation reading.
///
/// Mapped lunar terrain carries meter-scale uncertainty, and real surfaces
/// are rougher than the smooth noise field; a little jitter keeps generated
/// profiles from being implausibly clean.
pub fn add_elevation_jitter(elevation_m: f64, rng: &mut impl Rng, std_dev_m: f64) -> f64 {
    use rand_distr::{Distribution, Normal};
    let normal = Normal::new(0.0, std_dev_m).unwrap();
    elevation_m + normal.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_deterministic() {
        let field = ElevationField::taurus_littrow(42);
        let e1 = field.elevation_at(750.0);
        let e2 = field.elevation_at(750.0);
        assert!((e1 - e2).abs() < 0.001);
    }

    #[test]
    fn test_elevation_stays_within_relief() {
        let field = ElevationField::taurus_littrow(42);
        for i in 0..200 {
            let elev = field.elevation_at(i as f64 * 17.0);
            assert!(elev > field.terrain.base_elevation_m - field.terrain.relief_m);
            assert!(elev < field.terrain.base_elevation_m + field.terrain.relief_m);
        }
    }

    #[test]
    fn test_sample_line_covers_endpoints() {
        let field = ElevationField::shackleton_rim(7);
        let samples = field.sample_line(2000.0, 5.0);
        assert_eq!(samples.len(), 401);
        assert!((samples[0] - field.elevation_at(0.0)).abs() < 1e-9);
        assert!((samples[400] - field.elevation_at(2000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_sample_line_uneven_tail() {
        let field = ElevationField::taurus_littrow(3);
        // 12 m at 5 m spacing: samples at 0, 5, 10, 12
        let samples = field.sample_line(12.0, 5.0);
        assert_eq!(samples.len(), 4);
    }
}
