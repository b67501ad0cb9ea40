//! Unit conversions and physiological constants shared by the models.

/// Conversion factor from km/hr to m/s.
pub const KMH_TO_MPS: f64 = 5.0 / 18.0;

/// Converts a rise/run grade fraction to percent.
pub const GRADE_TO_PERCENT: f64 = 100.0;

/// Joules per kilocalorie.
pub const JOULES_PER_KCAL: f64 = 4184.0;

/// Liters of oxygen consumed per kilocalorie of metabolic energy.
///
/// The body liberates roughly 5 kcal per liter of O2 at a typical
/// respiratory quotient, so consumption is energy over five.
pub const LITERS_O2_PER_KCAL: f64 = 1.0 / 5.0;

/// Fraction of terrestrial walking cost retained under lunar gravity.
///
/// Load-carriage studies show the metabolic cost of walking drops by about
/// a third when gravity is reduced. Holds for walking gaits only; running
/// scales differently and is not modeled.
pub const PARTIAL_GRAVITY_FACTOR: f64 = 2.0 / 3.0;
