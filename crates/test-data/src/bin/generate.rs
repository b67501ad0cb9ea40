//! Default fixture script - writes the preset walk scenarios as JSON fixtures
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin generate
//! ```

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::export::{FixtureDocument, write_fixture};
use test_data::scenario::ScenarioBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let fixture_dir =
        PathBuf::from(std::env::var("FIXTURE_DIR").unwrap_or_else(|_| "./fixtures".to_string()));

    let mut rng = StdRng::seed_from_u64(12345); // Reproducible fixtures

    let presets = [
        ("nominal_traverse", ScenarioBuilder::nominal_traverse()),
        ("mare_crossing", ScenarioBuilder::mare_crossing()),
        ("depletion_drill", ScenarioBuilder::depletion_drill()),
        ("polar_rim_stress", ScenarioBuilder::polar_rim_stress_test()),
    ];

    for (name, builder) in presets {
        let result = builder.build_data(&mut rng)?;
        let document = FixtureDocument::from_result(name, &result);
        let path = write_fixture(&document, &fixture_dir)?;

        let summary = &result.telemetry.summary;
        tracing::info!("Wrote {}", path.display());
        tracing::info!("  Steps: {}", result.profile.len());
        tracing::info!("  Duration: {:.0} s", summary.duration_s);
        tracing::info!("  Oxygen used: {:.1} L", summary.oxygen_used_l);
        if let Some(depleted_at_s) = summary.depleted_at_s {
            tracing::info!("  Tank ran dry at {:.0} s", depleted_at_s);
        }
    }

    tracing::info!("Fixture generation completed!");

    Ok(())
}
