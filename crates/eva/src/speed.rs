//! Walking speed as a function of terrain slope.

/// Level-walking peak of the unmodified hiking-speed function, km/hr.
const BASE_SPEED_KMH: f64 = 6.0;

/// Rebases the ~5 km/hr level-walking peak to ~2 km/hr for a suited walker.
const SUIT_REBASE: f64 = 2.0 / 5.0;

/// Exponential decay rate per unit of grade offset.
const GRADE_DECAY: f64 = 3.5;

/// Grade offset placing peak speed on a slight downhill.
const PEAK_GRADE_OFFSET: f64 = 0.05;

/// Walking speed and terrain grade derived from a slope angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeSpeed {
    /// Walking speed in km/hr.
    pub speed_kmh: f64,
    /// Terrain grade as rise over run (tangent of the slope angle).
    pub grade: f64,
}

/// Computes walking speed for a terrain slope in degrees.
///
/// Uses a grade-offset exponential hiking-speed function rebased for a
/// suited walker: speed peaks at 2.4 km/hr on a slight downhill (grade
/// -0.05, about -2.9 degrees) and decays exponentially as the grade departs
/// from that optimum in either direction. Level ground comes out at roughly
/// 2 km/hr.
///
/// The grade is returned alongside the speed so downstream models reuse the
/// same tangent instead of recomputing it. Total over all inputs; near
/// +/-90 degrees the tangent blows up and the IEEE result carries through,
/// with the speed underflowing toward zero.
pub fn walking_speed(slope_angle_deg: f64) -> SlopeSpeed {
    let grade = slope_angle_deg.to_radians().tan();
    let speed_kmh =
        BASE_SPEED_KMH * SUIT_REBASE * (-GRADE_DECAY * (grade + PEAK_GRADE_OFFSET).abs()).exp();

    SlopeSpeed { speed_kmh, grade }
}
