//! Walking physiology and oxygen budgeting for suited EVA traverses.
//!
//! Models an astronaut walking sloped terrain as a chain of four pure
//! stages, each a closed-form equation over plain `f64` scalars:
//!
//! 1. [`walking_speed`] - terrain slope to walking speed and grade.
//! 2. [`metabolic_rate`] - speed, grade, and carried weight to metabolic
//!    cost under lunar gravity.
//! 3. [`oxygen_consumed`] - metabolic cost over a time step to liters of
//!    oxygen drawn from the tank.
//! 4. [`remaining_oxygen`] / [`elapsed_time`] - the running tank and clock
//!    totals threaded between steps.
//!
//! The stages are independently callable; [`simulate`] folds them over a
//! [`SlopeProfile`] and records per-step [`TickRecord`]s plus a
//! [`WalkSummary`].
//!
//! Every stage is total: out-of-domain inputs (a vertical slope, a negative
//! speed) propagate IEEE NaN or infinity instead of panicking, and the tank
//! is allowed to go negative so callers can observe depletion rather than
//! have it masked.

pub mod budget;
pub mod constants;
pub mod energy;
pub mod errors;
pub mod metrics;
pub mod oxygen;
pub mod profile;
pub mod simulation;
pub mod speed;

pub use budget::{elapsed_time, remaining_oxygen};
pub use energy::metabolic_rate;
pub use errors::EvaError;
pub use metrics::{TickMetric, WalkSummary, summarize};
pub use oxygen::oxygen_consumed;
pub use profile::{SlopeProfile, SlopeStep};
pub use simulation::{Telemetry, TickRecord, WalkConfig, simulate};
pub use speed::{SlopeSpeed, walking_speed};
