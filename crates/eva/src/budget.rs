//! Running totals threaded through a traverse.

/// Remaining tank oxygen after a consumption step.
///
/// Plain subtraction with no floor: a negative result means the tank ran
/// dry partway through the step, and callers watch for the sign change
/// instead of having it masked here.
pub fn remaining_oxygen(current_l: f64, consumed_l: f64) -> f64 {
    current_l - consumed_l
}

/// Elapsed traverse time after a step.
pub fn elapsed_time(current_s: f64, dt_s: f64) -> f64 {
    current_s + dt_s
}
