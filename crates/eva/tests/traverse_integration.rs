//! End-to-end tests for the walk pipeline.
//!
//! These drive the four model stages the way a mission planner would: by
//! hand for single steps, and through the simulation driver for whole
//! traverses, checking the telemetry series against the summary figures.

use eva::constants::KMH_TO_MPS;
use eva::{
    SlopeProfile, WalkConfig, elapsed_time, metabolic_rate, oxygen_consumed, remaining_oxygen,
    simulate, walking_speed,
};

#[test]
fn test_reference_walk_by_hand() {
    // One step at 10 degrees: 50 kg carried, 1 s step, 100 L tank
    let slope = walking_speed(10.0);
    assert!((slope.grade - 0.17632698070846498).abs() < 1e-9);
    assert!((slope.speed_kmh - 1.0868942364968133).abs() < 1e-9);

    let rate = metabolic_rate(50.0, slope.speed_kmh, slope.grade);
    assert!((rate - 0.03508333373717551).abs() < 1e-9);

    let used = oxygen_consumed(rate, 1.0);
    assert!((used - 0.007016666747435102).abs() < 1e-9);

    let remaining = remaining_oxygen(100.0, used);
    assert!((remaining - 99.99298333325257).abs() < 1e-9);

    let elapsed = elapsed_time(0.0, 1.0);
    assert_eq!(elapsed, 1.0);
}

#[test]
fn test_simulate_matches_manual_chain() {
    // The driver runs the exact same stage calls in the same order
    let slope = walking_speed(10.0);
    let rate = metabolic_rate(50.0, slope.speed_kmh, slope.grade);
    let used = oxygen_consumed(rate, 1.0);

    let profile = SlopeProfile::uniform(&[10.0], 1.0);
    let config = WalkConfig {
        payload_kg: 50.0,
        tank_l: 100.0,
    };
    let telemetry = simulate(&profile, &config).unwrap();
    let tick = &telemetry.records[0];

    assert_eq!(tick.speed_kmh, slope.speed_kmh);
    assert_eq!(tick.metabolic_rate_kcal_s, rate);
    assert_eq!(tick.oxygen_used_l, used);
    assert_eq!(tick.oxygen_remaining_l, remaining_oxygen(100.0, used));
}

#[test]
fn test_summary_agrees_with_records() {
    let profile = SlopeProfile::uniform(&[0.0, 5.0, 10.0, -5.0, -10.0, 2.0, -2.0], 30.0);
    let config = WalkConfig {
        payload_kg: 60.0,
        tank_l: 500.0,
    };
    let telemetry = simulate(&profile, &config).unwrap();
    let summary = &telemetry.summary;

    let total_duration: f64 = telemetry.records.iter().map(|t| t.duration_s).sum();
    let total_used: f64 = telemetry.records.iter().map(|t| t.oxygen_used_l).sum();
    let total_distance: f64 = telemetry
        .records
        .iter()
        .map(|t| t.speed_kmh * KMH_TO_MPS * t.duration_s)
        .sum();

    assert!((summary.duration_s - total_duration).abs() < 1e-9);
    assert!((summary.oxygen_used_l - total_used).abs() < 1e-12);
    assert!((summary.distance_m - total_distance).abs() < 1e-9);
    assert_eq!(
        summary.oxygen_remaining_l,
        telemetry.records.last().unwrap().oxygen_remaining_l
    );

    // Mixed uphill and downhill legs, ample tank
    assert!(summary.ascent_m > 0.0);
    assert!(summary.descent_m > 0.0);
    assert!(summary.depleted_at_s.is_none());
}

#[test]
fn test_depletion_mid_walk() {
    // 80 kg up a steady 5 degree climb drains a 1 L tank on the second
    // one-minute step
    let profile = SlopeProfile::uniform(&[5.0; 4], 60.0);
    let config = WalkConfig {
        payload_kg: 80.0,
        tank_l: 1.0,
    };
    let telemetry = simulate(&profile, &config).unwrap();

    assert_eq!(telemetry.summary.depleted_at_s, Some(120.0));
    assert!(telemetry.records[0].oxygen_remaining_l > 0.0);
    assert!(telemetry.records[1].oxygen_remaining_l < 0.0);

    // The series keeps draining linearly past zero
    let per_step = telemetry.records[0].oxygen_used_l;
    assert!((per_step - 0.5931050021020844).abs() < 1e-9);
    let last = telemetry.records.last().unwrap();
    assert!((last.oxygen_remaining_l - (1.0 - 4.0 * per_step)).abs() < 1e-9);
}

#[test]
fn test_uphill_outspends_level_ground() {
    // Same schedule, steeper terrain: slower going and a higher burn rate
    let config = WalkConfig {
        payload_kg: 50.0,
        tank_l: 100.0,
    };
    let level = simulate(&SlopeProfile::uniform(&[0.0; 10], 60.0), &config).unwrap();
    let climb = simulate(&SlopeProfile::uniform(&[10.0; 10], 60.0), &config).unwrap();

    assert!(climb.summary.oxygen_used_l > level.summary.oxygen_used_l);
    assert!(climb.summary.distance_m < level.summary.distance_m);
    assert_eq!(climb.summary.duration_s, level.summary.duration_s);
}

#[test]
fn test_oxygen_fold_needs_constant_rate() {
    let config = WalkConfig {
        payload_kg: 50.0,
        tank_l: 100.0,
    };

    // Constant slope: splitting the step changes nothing (within rounding)
    let split = simulate(&SlopeProfile::uniform(&[0.0, 0.0], 1.0), &config).unwrap();
    let whole = simulate(&SlopeProfile::uniform(&[0.0], 2.0), &config).unwrap();
    assert!(
        (split.summary.oxygen_used_l - whole.summary.oxygen_used_l).abs() < 1e-12,
        "constant-rate fold should match"
    );

    // Changing slope mid-walk: collapsing to the first rate misestimates
    let varied = simulate(&SlopeProfile::uniform(&[0.0, 10.0], 1.0), &config).unwrap();
    let level_rate = varied.records[0].metabolic_rate_kcal_s;
    let collapsed = oxygen_consumed(level_rate, 2.0);
    assert!(
        (varied.summary.oxygen_used_l - collapsed).abs() > 1e-6,
        "a varying rate cannot be folded into one step"
    );
}
