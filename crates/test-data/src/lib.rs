//! Test data generation for moonwalk.
//!
//! This crate provides tools for synthesizing lunar terrain, deriving walkable
//! slope profiles from it, and packaging the resulting walk telemetry as JSON
//! fixtures to support manual verification and integration testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = ScenarioBuilder::new()
//!     .with_site(Site::TAURUS_LITTROW)
//!     .with_traverse_distance(2000.0)
//!     .with_payload(60.0)
//!     .with_tank(500.0)
//!     .build_data(&mut rng)?;
//!
//! let fixture = FixtureDocument::from_result("nominal", &result);
//! write_fixture(&fixture, Path::new("./fixtures"))?;
//! ```

pub mod config;
pub mod export;
pub mod scenario;
pub mod terrain;
pub mod traverse;

// Re-export core types from the eva crate
pub use eva::{SlopeProfile, SlopeStep, Telemetry, TickRecord, WalkConfig, WalkSummary};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ScenarioConfig, Site, SiteTerrain};
    pub use crate::export::{ExportError, FixtureDocument, fixture_json, write_fixture};
    pub use crate::scenario::{ScenarioBuilder, ScenarioMetrics, ScenarioResult};
    pub use crate::terrain::{ElevationField, add_elevation_jitter};
    pub use crate::traverse::TraverseGenerator;
    pub use crate::{SlopeProfile, SlopeStep, Telemetry, TickRecord, WalkConfig, WalkSummary};
}
