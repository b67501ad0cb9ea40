//! Example: Run a tank-depletion drill and inspect post-depletion telemetry.
//!
//! This walks 3 km with a heavy payload and a 5 L tank:
//! - The tank runs dry a few hundred seconds into the walk
//! - Telemetry keeps recording after depletion, with remaining oxygen
//!   going negative to show the size of the shortfall
//!
//! Run with:
//! ```
//! cargo run -p test-data --example depletion_drill
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::scenario::ScenarioBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = StdRng::seed_from_u64(12345);

    let result = ScenarioBuilder::depletion_drill()
        .with_seed(12345)
        .build_data(&mut rng)?;

    let summary = &result.telemetry.summary;
    tracing::info!("Drill completed!");
    tracing::info!("  Duration: {:.0} s", summary.duration_s);
    tracing::info!("  Oxygen used: {:.1} L", summary.oxygen_used_l);

    match summary.depleted_at_s {
        Some(depleted_at_s) => {
            tracing::info!("  Tank ran dry at {:.0} s", depleted_at_s);
            tracing::info!(
                "  Shortfall at walk end: {:.1} L",
                -summary.oxygen_remaining_l
            );

            // Show the first few steps walked on an empty tank
            let dry_steps = result
                .telemetry
                .records
                .iter()
                .filter(|r| r.oxygen_remaining_l < 0.0)
                .take(3);

            for record in dry_steps {
                tracing::info!(
                    "  {:.0} s: {:.1} degrees, {:.3} L short",
                    record.elapsed_s,
                    record.slope_angle_deg,
                    -record.oxygen_remaining_l
                );
            }
        }
        None => tracing::info!("  Tank lasted the whole walk"),
    }

    Ok(())
}
