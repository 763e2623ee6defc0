use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

use kinetic_core::{OdeSystem, StateVector};

use super::{Action, ConfigError, Error, Event, Rk4, Stage, Status, solve, solve_unobserved};

/// dx/dt = 2t, so x(t) = t² + x(0).
fn ramp(_n: usize, s: &StateVector) -> StateVector {
    StateVector::from([1.0, 2.0 * s.time()])
}

/// dx/dt = -x, so x(t) = x(0)·e^(-t).
struct Decay;

impl OdeSystem for Decay {
    fn derivative(&self, _n: usize, state: &StateVector) -> StateVector {
        StateVector::from([1.0, -state[1]])
    }
}

/// Undamped unit oscillator: x'' = -x.
struct Harmonic;

impl OdeSystem for Harmonic {
    fn derivative(&self, _n: usize, state: &StateVector) -> StateVector {
        StateVector::from([1.0, state[2], -state[1]])
    }
}

/// Always returns a derivative that is one component too short.
struct Truncating;

impl OdeSystem for Truncating {
    fn derivative(&self, n: usize, _state: &StateVector) -> StateVector {
        StateVector::zeros(n - 1)
    }
}

#[test]
fn single_step_is_exact_for_quadratic_solution() {
    let engine = Rk4::initialize(1.0, 2).expect("valid config");

    let next = engine
        .step(&StateVector::from([0.0, 0.0]), &ramp)
        .expect("should step");

    assert_eq!(next, StateVector::from([1.0, 1.0]));
}

#[test]
fn step_does_not_mutate_input() {
    let engine = Rk4::initialize(0.5, 2).expect("valid config");
    let s0 = StateVector::from([0.0, 3.0]);

    let _ = engine.step(&s0, &Decay).expect("should step");

    assert_eq!(s0, StateVector::from([0.0, 3.0]));
}

#[test]
fn exponential_decay_is_fourth_order_accurate() {
    let engine = Rk4::initialize(0.1, 2).expect("valid config");

    let solution =
        solve_unobserved(&engine, &Decay, StateVector::from([0.0, 1.0]), 10).expect("should solve");

    let last = solution.history.last().expect("history is never empty");
    assert_relative_eq!(last.time(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(last[1], (-1.0_f64).exp(), epsilon = 1e-6);
}

#[test]
fn harmonic_oscillator_tracks_cosine() {
    let engine = Rk4::initialize(0.01, 3).expect("valid config");

    let solution = solve_unobserved(&engine, &Harmonic, StateVector::from([0.0, 1.0, 0.0]), 314)
        .expect("should solve");

    for state in &solution.history {
        assert_abs_diff_eq!(state[1], state.time().cos(), epsilon = 1e-8);
        assert_abs_diff_eq!(state[2], -state.time().sin(), epsilon = 1e-8);
    }
}

#[test]
fn reused_engine_gives_identical_steps() {
    let engine = Rk4::initialize(0.2, 3).expect("valid config");
    let s0 = StateVector::from([1.0, 0.5, -0.25]);

    let first = engine.step(&s0, &Harmonic).expect("should step");
    let second = engine.step(&s0, &Harmonic).expect("should step");

    assert_eq!(first, second);
}

#[test]
fn reinitialize_changes_step_and_dimension() {
    let mut engine = Rk4::initialize(0.1, 3).expect("valid config");

    engine.reinitialize(0.5, 2).expect("valid config");
    assert_eq!(engine.step_size(), 0.5);
    assert_eq!(engine.dimension(), 2);

    let next = engine
        .step(&StateVector::from([0.0, 0.0]), &ramp)
        .expect("should step");
    assert_relative_eq!(next[1], 0.25);
}

#[test]
fn failed_reinitialize_keeps_previous_config() {
    let mut engine = Rk4::initialize(0.1, 3).expect("valid config");

    let err = engine.reinitialize(-1.0, 3).expect_err("negative step");

    assert_eq!(err, ConfigError::NonPositiveStepSize { step_size: -1.0 });
    assert_eq!(engine.step_size(), 0.1);
    assert_eq!(engine.dimension(), 3);
}

#[test]
fn rejects_state_of_wrong_length() {
    let engine = Rk4::initialize(0.1, 3).expect("valid config");

    let err = engine
        .step(&StateVector::from([0.0, 1.0]), &Harmonic)
        .expect_err("length mismatch");

    assert_eq!(
        err,
        Error::StateLength {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn rejects_derivative_of_wrong_length() {
    let engine = Rk4::initialize(0.1, 3).expect("valid config");

    let err = engine
        .step(&StateVector::from([0.0, 1.0, 0.0]), &Truncating)
        .expect_err("derivative length mismatch");

    assert_eq!(
        err,
        Error::DerivativeLength {
            stage: Stage::K1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn solve_records_initial_state_and_every_step() {
    let engine = Rk4::initialize(0.25, 2).expect("valid config");

    let solution =
        solve_unobserved(&engine, &ramp, StateVector::from([0.0, 0.0]), 4).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 4);
    assert_eq!(solution.history.len(), 5);

    let times: Vec<f64> = solution.history.iter().map(StateVector::time).collect();
    assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    let samples = solution.samples(1);
    for (t, x) in samples {
        assert_relative_eq!(x, t * t, epsilon = 1e-12);
    }
}

#[test]
fn zero_steps_returns_initial() {
    let engine = Rk4::initialize(0.1, 2).expect("valid config");

    let solution =
        solve_unobserved(&engine, &Decay, StateVector::from([0.0, 5.0]), 0).expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.history, vec![StateVector::from([0.0, 5.0])]);
}

#[test]
fn solve_rejects_initial_state_of_wrong_length() {
    let engine = Rk4::initialize(0.1, 3).expect("valid config");

    let err = solve_unobserved(&engine, &Decay, StateVector::from([0.0, 1.0]), 10)
        .expect_err("length mismatch");

    assert!(matches!(err, Error::StateLength { expected: 3, found: 2 }));
}

#[test]
fn observer_can_stop_early() {
    let engine = Rk4::initialize(0.1, 2).expect("valid config");

    let observer = |event: &Event| {
        if event.step >= 5 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(&engine, &Decay, StateVector::from([0.0, 1.0]), 100, observer)
        .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 5);
    assert_eq!(solution.history.len(), 6);
}

#[test]
fn observer_can_stop_before_first_step() {
    let engine = Rk4::initialize(0.1, 2).expect("valid config");

    let solution = solve(
        &engine,
        &Decay,
        StateVector::from([0.0, 1.0]),
        100,
        |_: &Event| Some(Action::StopEarly),
    )
    .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.history.len(), 1);
}

#[test]
fn unbounded_step_count_runs_until_observer_stops() {
    let engine = Rk4::initialize(0.1, 2).expect("valid config");

    let solution = solve(
        &engine,
        &Decay,
        StateVector::from([0.0, 1.0]),
        usize::MAX,
        |event: &Event| (event.step >= 3).then_some(Action::StopEarly),
    )
    .expect("should stop");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 3);
    assert_eq!(solution.history.len(), 4);
}

#[test]
fn events_carry_step_numbers_and_states() {
    let engine = Rk4::initialize(0.5, 2).expect("valid config");

    let mut seen = Vec::new();
    solve(
        &engine,
        &ramp,
        StateVector::from([0.0, 0.0]),
        2,
        |event: &Event| {
            seen.push((event.step, event.state.time()));
            None
        },
    )
    .expect("should solve");

    assert_eq!(seen, vec![(0, 0.0), (1, 0.5), (2, 1.0)]);
}

proptest! {
    #[test]
    fn time_advances_by_exactly_h(
        t0 in -1.0e3..1.0e3_f64,
        x0 in -10.0..10.0_f64,
        v0 in -10.0..10.0_f64,
        h in 1.0e-4..1.0_f64,
    ) {
        let engine = Rk4::initialize(h, 3).expect("valid config");

        let next = engine
            .step(&StateVector::from([t0, x0, v0]), &Harmonic)
            .expect("should step");

        prop_assert_eq!(next.time(), t0 + h);
    }

    #[test]
    fn exact_for_quartic_solutions(
        a in -10.0..10.0_f64,
        b in -10.0..10.0_f64,
        c in -10.0..10.0_f64,
        d in -10.0..10.0_f64,
        t0 in -5.0..5.0_f64,
        h in 1.0e-3..2.0_f64,
    ) {
        // dx/dt is a cubic in t, so x(t) is a quartic.
        let cubic = move |_n: usize, s: &StateVector| {
            let t = s.time();
            StateVector::from([1.0, a + b * t + c * t.powi(2) + d * t.powi(3)])
        };
        let antiderivative =
            |t: f64| a * t + b * t.powi(2) / 2.0 + c * t.powi(3) / 3.0 + d * t.powi(4) / 4.0;

        let engine = Rk4::initialize(h, 2).expect("valid config");
        let next = engine
            .step(&StateVector::from([t0, 0.0]), &cubic)
            .expect("should step");

        let exact = antiderivative(t0 + h) - antiderivative(t0);
        let scale = 1.0 + antiderivative(t0 + h).abs() + antiderivative(t0).abs();
        prop_assert!((next[1] - exact).abs() <= 1e-9 * scale);
    }
}
