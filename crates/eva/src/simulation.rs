//! Traverse simulation over a slope profile.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::budget::{elapsed_time, remaining_oxygen};
use crate::energy::metabolic_rate;
use crate::errors::EvaError;
use crate::metrics::{WalkSummary, summarize};
use crate::oxygen::oxygen_consumed;
use crate::profile::SlopeProfile;
use crate::speed::walking_speed;

/// Suit and consumables configuration for a walk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Carried weight in kilograms, suit included.
    pub payload_kg: f64,
    /// Oxygen tank capacity in liters.
    ///
    /// Tank sizing is mission configuration, not part of the physiology,
    /// so it always comes from the caller.
    pub tank_l: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            payload_kg: 50.0,
            tank_l: 500.0,
        }
    }
}

/// Telemetry for one simulated step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Elapsed time at the end of this step, in seconds.
    pub elapsed_s: f64,
    /// Slope held during the step, in degrees.
    pub slope_angle_deg: f64,
    /// Step length in seconds.
    pub duration_s: f64,
    /// Terrain grade, rise over run.
    pub grade: f64,
    /// Walking speed in km/hr.
    pub speed_kmh: f64,
    /// Metabolic rate in kcal/s.
    pub metabolic_rate_kcal_s: f64,
    /// Oxygen drawn during the step, in liters.
    pub oxygen_used_l: f64,
    /// Tank contents after the step, in liters.
    pub oxygen_remaining_l: f64,
}

/// Full output of a simulated walk: the per-step series plus aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub records: Vec<TickRecord>,
    pub summary: WalkSummary,
}

/// Walks a slope profile and returns the recorded telemetry.
///
/// Each step chains the models in order: slope to speed and grade, those to
/// metabolic rate, rate to oxygen drawn, then the two running totals. The
/// totals live in locals threaded through the loop; nothing is shared.
///
/// Remaining oxygen has no floor. Once the tank runs dry the series simply
/// continues into negative values, the crossing is logged once, and the
/// summary carries the crossing time.
///
/// Returns [`EvaError::InvalidProfile`] for an empty profile or a step with
/// a non-positive duration.
pub fn simulate(profile: &SlopeProfile, config: &WalkConfig) -> Result<Telemetry, EvaError> {
    if profile.is_empty() {
        return Err(EvaError::InvalidProfile("profile has no steps".into()));
    }
    if let Some(step) = profile.steps.iter().find(|s| !(s.duration_s > 0.0)) {
        return Err(EvaError::InvalidProfile(format!(
            "step duration must be positive, got {}",
            step.duration_s
        )));
    }

    debug!(
        "starting walk: {} steps, {} kg carried, {} L tank",
        profile.len(),
        config.payload_kg,
        config.tank_l
    );

    let mut records = Vec::with_capacity(profile.len());
    let mut oxygen_l = config.tank_l;
    let mut elapsed_s = 0.0;
    let mut tank_dry = false;

    for step in &profile.steps {
        let slope = walking_speed(step.slope_angle_deg);
        let rate = metabolic_rate(config.payload_kg, slope.speed_kmh, slope.grade);
        let used = oxygen_consumed(rate, step.duration_s);

        oxygen_l = remaining_oxygen(oxygen_l, used);
        elapsed_s = elapsed_time(elapsed_s, step.duration_s);

        if oxygen_l < 0.0 && !tank_dry {
            tank_dry = true;
            warn!("oxygen tank depleted {elapsed_s:.0} s into the walk");
        }

        records.push(TickRecord {
            elapsed_s,
            slope_angle_deg: step.slope_angle_deg,
            duration_s: step.duration_s,
            grade: slope.grade,
            speed_kmh: slope.speed_kmh,
            metabolic_rate_kcal_s: rate,
            oxygen_used_l: used,
            oxygen_remaining_l: oxygen_l,
        });
    }

    let summary = summarize(&records);
    debug!(
        "walk finished: {:.0} s, {:.2} L oxygen used",
        summary.duration_s, summary.oxygen_used_l
    );

    Ok(Telemetry { records, summary })
}
