//! Oxygen drawn from the tank for a metabolic workload.

use crate::constants::LITERS_O2_PER_KCAL;

/// Liters of oxygen consumed over one time step.
///
/// Straight respiratory conversion of the metabolic energy spent during the
/// step. A zero rate or zero step consumes nothing; a negative step yields
/// negative consumption and is left to the caller to interpret.
pub fn oxygen_consumed(metabolic_rate_kcal_s: f64, dt_s: f64) -> f64 {
    metabolic_rate_kcal_s * LITERS_O2_PER_KCAL * dt_s
}
