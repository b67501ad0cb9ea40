//! Streaming accumulators folding per-tick telemetry into a walk summary.

use serde::{Deserialize, Serialize};

use crate::constants::KMH_TO_MPS;
use crate::simulation::TickRecord;

pub trait TickMetric {
    type Summary;
    fn next_tick(&mut self, tick: &TickRecord);
    fn finish(&mut self) -> Self::Summary;
}

/// Aggregate figures for a completed walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkSummary {
    /// Total walk duration in seconds.
    pub duration_s: f64,
    /// Ground distance covered in meters.
    pub distance_m: f64,
    /// Total climb in meters.
    pub ascent_m: f64,
    /// Total descent in meters, as a positive figure.
    pub descent_m: f64,
    /// Oxygen drawn from the tank in liters.
    pub oxygen_used_l: f64,
    /// Tank contents at the end of the walk, in liters.
    pub oxygen_remaining_l: f64,
    /// Elapsed time at which the tank first went negative, if it did.
    pub depleted_at_s: Option<f64>,
}

/// Folds a tick series into a [`WalkSummary`].
pub fn summarize(ticks: &[TickRecord]) -> WalkSummary {
    let mut acc = SummaryMetrics::default();
    for tick in ticks {
        acc.next_tick(tick);
    }
    acc.finish()
}

#[derive(Debug, Clone, Default)]
struct SummaryMetrics {
    duration: DurationMetric,
    distance: DistanceMetric,
    climb: ClimbMetric,
    oxygen: OxygenMetric,
}

impl TickMetric for SummaryMetrics {
    type Summary = WalkSummary;

    fn next_tick(&mut self, tick: &TickRecord) {
        self.duration.next_tick(tick);
        self.distance.next_tick(tick);
        self.climb.next_tick(tick);
        self.oxygen.next_tick(tick);
    }

    fn finish(&mut self) -> WalkSummary {
        let (ascent_m, descent_m) = self.climb.finish();
        let oxygen = self.oxygen.finish();
        WalkSummary {
            duration_s: self.duration.finish(),
            distance_m: self.distance.finish(),
            ascent_m,
            descent_m,
            oxygen_used_l: oxygen.used_l,
            oxygen_remaining_l: oxygen.remaining_l,
            depleted_at_s: oxygen.depleted_at_s,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct DurationMetric {
    total_s: f64,
}

impl TickMetric for DurationMetric {
    type Summary = f64;

    fn next_tick(&mut self, tick: &TickRecord) {
        self.total_s += tick.duration_s;
    }

    fn finish(&mut self) -> f64 {
        self.total_s
    }
}

#[derive(Debug, Clone, Default)]
struct DistanceMetric {
    total_m: f64,
}

impl TickMetric for DistanceMetric {
    type Summary = f64;

    fn next_tick(&mut self, tick: &TickRecord) {
        self.total_m += tick.speed_kmh * KMH_TO_MPS * tick.duration_s;
    }

    fn finish(&mut self) -> f64 {
        self.total_m
    }
}

#[derive(Debug, Clone, Default)]
struct ClimbMetric {
    ascent_m: f64,
    descent_m: f64,
}

impl TickMetric for ClimbMetric {
    type Summary = (f64, f64);

    fn next_tick(&mut self, tick: &TickRecord) {
        let walked_m = tick.speed_kmh * KMH_TO_MPS * tick.duration_s;
        // Vertical component of the walked distance at this grade
        let rise_m = walked_m * tick.grade / (1.0 + tick.grade * tick.grade).sqrt();
        if rise_m > 0.0 {
            self.ascent_m += rise_m;
        } else {
            self.descent_m -= rise_m;
        }
    }

    fn finish(&mut self) -> (f64, f64) {
        (self.ascent_m, self.descent_m)
    }
}

#[derive(Debug, Clone, Default)]
struct OxygenMetric {
    used_l: f64,
    remaining_l: f64,
    depleted_at_s: Option<f64>,
}

impl TickMetric for OxygenMetric {
    type Summary = OxygenFigures;

    fn next_tick(&mut self, tick: &TickRecord) {
        self.used_l += tick.oxygen_used_l;
        self.remaining_l = tick.oxygen_remaining_l;
        if self.depleted_at_s.is_none() && tick.oxygen_remaining_l < 0.0 {
            self.depleted_at_s = Some(tick.elapsed_s);
        }
    }

    fn finish(&mut self) -> OxygenFigures {
        OxygenFigures {
            used_l: self.used_l,
            remaining_l: self.remaining_l,
            depleted_at_s: self.depleted_at_s,
        }
    }
}

#[derive(Debug, Clone)]
struct OxygenFigures {
    used_l: f64,
    remaining_l: f64,
    depleted_at_s: Option<f64>,
}
