//! Example: Walk a routine geology traverse and summarize the oxygen budget.
//!
//! This generates a 2 km walk across the Taurus-Littrow valley floor:
//! - Slope profile sampled from layered Perlin terrain
//! - 60 kg of suit and sample kit carried
//! - A 500 L tank, so the walk ends with comfortable margin
//!
//! Run with:
//! ```
//! cargo run -p test-data --example nominal_traverse
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

    let result = ScenarioBuilder::nominal_traverse()
        .with_seed(12345)
        .build_data(&mut rng)?;

    let summary = &result.telemetry.summary;
    tracing::info!("Walk completed!");
    tracing::info!("  Steps: {}", result.profile.len());
    tracing::info!("  Duration: {:.0} s", summary.duration_s);
    tracing::info!("  Distance: {:.0} m", summary.distance_m);
    tracing::info!(
        "  Ascent: {:.1} m, descent: {:.1} m",
        summary.ascent_m,
        summary.descent_m
    );
    tracing::info!("  Oxygen used: {:.1} L", summary.oxygen_used_l);
    tracing::info!("  Oxygen remaining: {:.1} L", summary.oxygen_remaining_l);

    // Print the steepest stretch of the walk
    let steepest = result.telemetry.records.iter().max_by(|a, b| {
        a.slope_angle_deg
            .abs()
            .partial_cmp(&b.slope_angle_deg.abs())
            .unwrap()
    });

    if let Some(record) = steepest {
        tracing::info!(
            "Steepest step: {:.1} degrees at {:.0} s, walked at {:.2} km/h",
            record.slope_angle_deg,
            record.elapsed_s,
            record.speed_kmh
        );
    }

    Ok(())
}
