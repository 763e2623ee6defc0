//! Interactive mass-spring-damper: RK4 trajectory against the exact solution.
//!
//! # Usage
//!
//! ```text
//! cargo run -p kinetic-observers --example msd --features plot
//! cargo run -p kinetic-observers --example msd --features plot -- 0.5
//! cargo run -p kinetic-observers --example msd --features plot -- 2.0 0.05
//! cargo run -p kinetic-observers --example msd --features plot -- 0.5 0.01 0.0
//! ```
//!
//! Arguments are the damping coefficient `c` (default 0.5), the step size
//! `dt` (default 0.01), and the initial displacement `x0` (default: the
//! steady state). The mass starts with unit velocity.
//!
//! The exact solution is overlaid whenever the damping case has one. Starting
//! away from the steady state with `c > 0` shows the RK4 trace alone.

use std::error::Error;

use kinetic_models::mass_spring_damper::{MassSpringDamper, Parameters};
use kinetic_observers::{PlotObserver, ShowConfig};
use kinetic_solvers::transient::rk4::{self, Rk4};

/// Simulated duration in seconds.
const DURATION: f64 = 20.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<f64> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<_, _>>()
        .unwrap_or_else(|_| {
            eprintln!("Usage: msd [c [dt [x0]]], all numbers");
            std::process::exit(1);
        });

    let c = args.first().copied().unwrap_or(0.5);
    let dt = args.get(1).copied().unwrap_or(0.01);

    let mut msd = MassSpringDamper::new(Parameters::default().damping_coefficient_si(c))?;
    let x0 = args.get(2).copied().unwrap_or(msd.steady_state());
    msd.set_initial_conditions(x0, 1.0)?;

    let case = *msd.damping_case();
    tracing::info!(
        natural_frequency = msd.natural_frequency(),
        damping_ratio = msd.damping_ratio(),
        steady_state = msd.steady_state(),
        "{} {}",
        case.case_label(),
        case.form_label()
    );

    let engine = Rk4::initialize(dt, MassSpringDamper::DIMENSION)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (DURATION / dt).round() as usize;

    let mut obs = PlotObserver::<2>::new(["RK4", "Exact"]);
    let solution = rk4::solve(
        &engine,
        &msd,
        msd.state().clone(),
        steps,
        |event: &rk4::Event| {
            obs.record(event.state.time(), [Some(event.state[1]), None]);
            None
        },
    )?;

    if let Some(exact) = case.sample(0.0, DURATION, dt)? {
        obs.extend(1, exact);
    }
    obs.reference("Steady state", msd.steady_state());

    if let Some(last) = solution.history.last() {
        msd.set_state(last.clone())?;
    }
    tracing::info!(t = msd.state().time(), x = msd.state()[1], "final state");

    obs.show(
        ShowConfig::new()
            .title(format!("Mass-spring-damper (c={c}, dt={dt})"))
            .note(case.case_label())
            .note(case.form_label())
            .legend(),
    )?;

    Ok(())
}
