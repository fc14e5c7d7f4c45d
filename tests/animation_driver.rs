use std::time::Duration;

use parabolic_rust::core::animation::{
    AnimationDriver, AnimationSettings, RunState, TICK_PERIOD, TickOutcome,
};
use parabolic_rust::core::ballistics::SimulationInputs;
use parabolic_rust::core::simulation::Simulation;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual={actual}, expected={expected}, tolerance={tolerance}"
    );
}

#[test]
fn default_launch_runs_to_completion_on_wall_clock_ticks() {
    let mut sim = Simulation::default();
    assert_close(sim.derived().flight_time_s, 7.21, 0.01);

    sim.toggle();
    let mut fired = 0;
    let mut frames = 0;
    while sim.run_state() == RunState::Running {
        fired += sim.advance(TICK_PERIOD);
        frames += 1;
        assert!(frames < 1_000, "run never completed");
    }

    // 7.208 / 0.05 -> 145 ticks, the last one completes the run.
    assert_eq!(fired, 145);
    assert_eq!(sim.time_s(), 0.0);
    assert!(!sim.timer_armed());
}

#[test]
fn uneven_frames_accumulate_into_ticks() {
    let mut sim = Simulation::default();
    sim.start();

    let frames = [16, 17, 16, 17, 16, 17];
    let fired: usize = frames
        .iter()
        .map(|ms| sim.advance(Duration::from_millis(*ms)))
        .sum();

    // 99 ms of wall clock is one full period plus change.
    assert_eq!(fired, 1);
    assert_close(sim.time_s(), 0.05, 1e-12);
}

#[test]
fn stop_mid_flight_discards_pending_ticks() {
    let mut sim = Simulation::default();
    sim.start();
    sim.advance(Duration::from_millis(540));
    assert_close(sim.time_s(), 0.5, 1e-12);

    assert_eq!(sim.toggle(), RunState::Stopped);
    assert_eq!(sim.time_s(), 0.0);
    assert_eq!(sim.advance(Duration::from_secs(1)), 0);
    assert_eq!(sim.tick(), TickOutcome::Idle);

    // Restart begins from zero with a fresh schedule.
    assert_eq!(sim.toggle(), RunState::Running);
    assert_eq!(sim.advance(Duration::from_millis(10)), 0);
    assert_eq!(sim.time_s(), 0.0);
}

#[test]
fn vertical_shot_completes_after_expected_ticks() {
    let inputs = SimulationInputs::new(10.0, 90.0).expect("inputs should be valid");
    let mut sim = Simulation::new(inputs, AnimationSettings::default());
    sim.start();

    let mut ticks = 0;
    while sim.tick() == TickOutcome::Advanced {
        ticks += 1;
    }
    // 2.0387 s of flight: 40 advancing ticks, the 41st completes.
    assert_eq!(ticks, 40);
    assert_eq!(sim.run_state(), RunState::Stopped);
    assert_eq!(sim.frame().control_label, "Start");
}

#[test]
fn flat_shot_stops_on_first_tick() {
    let inputs = SimulationInputs::new(40.0, 0.0).expect("inputs should be valid");
    let mut sim = Simulation::new(inputs, AnimationSettings::default());
    sim.start();
    assert_eq!(sim.tick(), TickOutcome::Completed);
    assert_eq!(sim.run_state(), RunState::Stopped);
}

#[test]
fn custom_settings_change_tick_cadence() {
    let settings =
        AnimationSettings::new(Duration::from_millis(20), 0.02).expect("settings are valid");
    let mut driver = AnimationDriver::new(settings);
    driver.start();

    assert_eq!(driver.advance(Duration::from_millis(100), 10.0), 5);
    assert_close(driver.time_s(), 0.10, 1e-12);
}

#[test]
fn dropping_a_running_driver_releases_its_timer() {
    let mut driver = AnimationDriver::new(AnimationSettings::default());
    driver.start();
    assert!(driver.timer_armed());
    drop(driver);
}
