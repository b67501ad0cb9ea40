//! Slope profiles describing a traverse as a step sequence.

use serde::{Deserialize, Serialize};

/// One step of a traverse: hold a slope for a duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeStep {
    /// Terrain slope in degrees, positive uphill.
    pub slope_angle_deg: f64,
    /// Time spent on this slope in seconds.
    pub duration_s: f64,
}

/// Sequence of slope steps making up a traverse.
///
/// Steps carry their own durations, so profiles sampled from terrain at a
/// fixed spacing (where time per step varies with walking speed) and
/// fixed-time-step profiles both fit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlopeProfile {
    pub steps: Vec<SlopeStep>,
}

impl SlopeProfile {
    /// Creates a profile from explicit steps.
    pub fn new(steps: Vec<SlopeStep>) -> Self {
        Self { steps }
    }

    /// Creates a profile holding each angle for the same fixed time step.
    pub fn uniform(slope_angles_deg: &[f64], dt_s: f64) -> Self {
        let steps = slope_angles_deg
            .iter()
            .map(|&slope_angle_deg| SlopeStep {
                slope_angle_deg,
                duration_s: dt_s,
            })
            .collect();
        Self { steps }
    }

    /// Total scheduled duration across all steps, in seconds.
    pub fn total_duration_s(&self) -> f64 {
        self.steps.iter().map(|step| step.duration_s).sum()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_profile() {
        let profile = SlopeProfile::uniform(&[0.0, 5.0, -3.0], 30.0);
        assert_eq!(profile.len(), 3);
        assert!(profile.steps.iter().all(|s| s.duration_s == 30.0));
        assert_eq!(profile.steps[1].slope_angle_deg, 5.0);
    }

    #[test]
    fn test_total_duration() {
        let profile = SlopeProfile::new(vec![
            SlopeStep {
                slope_angle_deg: 2.0,
                duration_s: 10.0,
            },
            SlopeStep {
                slope_angle_deg: -1.0,
                duration_s: 20.5,
            },
        ]);
        assert!((profile.total_duration_s() - 30.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_profile() {
        let profile = SlopeProfile::default();
        assert!(profile.is_empty());
        assert_eq!(profile.total_duration_s(), 0.0);
    }
}
