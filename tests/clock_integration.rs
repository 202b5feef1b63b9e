//! Clock integration tests for lag accumulation and fixed-update draining.

use auroraengine::services::time::{Clock, PacingMode};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Feed a sequence of elapsed times and drain all pending updates after
/// each, returning the total number of consumed updates.
fn drain(clock: &mut Clock, elapsed: &[f64]) -> u32 {
    let mut updates = 0;
    for &ms in elapsed {
        clock.advance(ms);
        while clock.is_update() {
            updates += 1;
        }
    }
    updates
}

#[test]
fn updates_equal_floor_of_total_elapsed_over_interval() {
    let cases: &[&[f64]] = &[
        &[25.0, 3.0, 25.0],
        &[5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
        &[7.5, 12.5, 100.0, 0.0, 19.9],
        &[19.9999],
        &[20.0],
        &[400.0],
    ];

    for elapsed in cases {
        let mut clock = Clock::new(0, 20.0, PacingMode::Sleep);
        let updates = drain(&mut clock, elapsed);

        let total: f64 = elapsed.iter().sum();
        let expected = (total / 20.0).floor() as u32;
        assert_eq!(updates, expected, "sequence {:?}", elapsed);

        // Final lag always lands in [0, interval).
        assert!(clock.lag_ms() >= 0.0, "sequence {:?}", elapsed);
        assert!(clock.lag_ms() < 20.0, "sequence {:?}", elapsed);
    }
}

#[test]
fn tick_scenario_25_3_25_yields_two_updates_and_13ms_lag() {
    let mut clock = Clock::new(0, 20.0, PacingMode::Sleep);
    let mut updates = 0;

    // 25ms: one update, 5ms left.
    clock.advance(25.0);
    while clock.is_update() {
        updates += 1;
    }
    assert_eq!(updates, 1);
    assert!(approx_eq(clock.lag_ms(), 5.0));

    // +3ms: no update, 8ms pending.
    clock.advance(3.0);
    while clock.is_update() {
        updates += 1;
    }
    assert_eq!(updates, 1);
    assert!(approx_eq(clock.lag_ms(), 8.0));

    // +25ms: 33ms pending, one more update, 13ms left.
    clock.advance(25.0);
    while clock.is_update() {
        updates += 1;
    }
    assert_eq!(updates, 2);
    assert!(approx_eq(clock.lag_ms(), 13.0));
}

#[test]
fn interpolation_tracks_lag_over_interval() {
    let mut clock = Clock::new(0, 20.0, PacingMode::Sleep);

    clock.advance(5.0);
    assert!((clock.interpolation() - 0.25).abs() < 1e-6);

    clock.advance(10.0);
    assert!((clock.interpolation() - 0.75).abs() < 1e-6);

    // Exceeds 1.0 until the update is consumed.
    clock.advance(10.0);
    assert!(clock.interpolation() > 1.0);
    assert!(clock.is_update());
    assert!((clock.interpolation() - 0.25).abs() < 1e-6);
}

#[test]
fn fixed_delta_is_interval_in_seconds() {
    let clock = Clock::new(0, 20.0, PacingMode::Sleep);
    assert!((clock.fixed_delta_seconds() - 0.02).abs() < 1e-6);

    let clock = Clock::new(0, 50.0, PacingMode::Sleep);
    assert!((clock.fixed_delta_seconds() - 0.05).abs() < 1e-6);
}

#[test]
fn real_ticks_accumulate_monotonically() {
    // Uncapped clock: ticks return immediately but time still flows.
    let mut clock = Clock::new(0, 20.0, PacingMode::Sleep);
    clock.tick();
    let first = clock.now_ms();
    clock.tick();

    assert!(clock.now_ms() >= first);
    assert!(clock.elapsed_ms() >= 0.0);
    assert!(clock.lag_ms() >= 0.0);
}

#[test]
fn discard_lag_drops_whole_intervals_only() {
    let mut clock = Clock::new(0, 20.0, PacingMode::Sleep);
    clock.advance(107.0);

    let dropped = clock.discard_lag();
    assert!(approx_eq(dropped, 100.0));
    assert!(approx_eq(clock.lag_ms(), 7.0));

    // Nothing left to drop below one interval.
    assert!(approx_eq(clock.discard_lag(), 0.0));
    assert!(approx_eq(clock.lag_ms(), 7.0));
}
