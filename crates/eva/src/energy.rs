//! Metabolic cost of walking under load.

use crate::constants::{GRADE_TO_PERCENT, JOULES_PER_KCAL, KMH_TO_MPS, PARTIAL_GRAVITY_FACTOR};

/// Metabolic rate for walking at a given speed and grade under load.
///
/// Implements the Load Carrying Decision Aid (LCDA) walking equation with
/// the carried weight as the load term, scaled by [`PARTIAL_GRAVITY_FACTOR`]
/// for lunar gravity. The equation nominally yields watts; the final step
/// treats that as J/s and divides by [`JOULES_PER_KCAL`], so the returned
/// rate is in kcal/s, which is what the oxygen model expects. The unit
/// tension between the nominal W output and the kcal/s return is a known
/// quirk of the formulation and is kept as-is.
///
/// A negative `speed_kmh` is outside the equation's domain: the fractional
/// power of a negative base yields NaN, which propagates rather than
/// panicking. Extreme grades can likewise overflow the nested exponential.
pub fn metabolic_rate(payload_kg: f64, speed_kmh: f64, grade: f64) -> f64 {
    // Grade as a percentage, speed as m/s
    let g = GRADE_TO_PERCENT * grade;
    let s = speed_kmh * KMH_TO_MPS;

    // LCDA walking equation: standing overhead, two speed terms, and the
    // speed-grade interaction with its downhill correction in the nested
    // exponential
    let per_kg = 1.44
        + 1.94 * s.powf(0.43)
        + 0.24 * s.powi(4)
        + 0.34 * s * g * (1.0 - 1.05_f64.powf(1.0 - 1.1_f64.powf(g + 32.0)));
    let energy_expenditure = per_kg * payload_kg;

    let reduced = PARTIAL_GRAVITY_FACTOR * energy_expenditure;
    reduced / JOULES_PER_KCAL
}
