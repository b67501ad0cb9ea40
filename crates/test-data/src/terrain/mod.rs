//! Terrain synthesis utilities.
//!
//! This module generates synthetic lunar elevation along a traverse line
//! using Perlin noise, parameterized per landing site.

mod elevation;

pub use elevation::{ElevationField, add_elevation_jitter};
