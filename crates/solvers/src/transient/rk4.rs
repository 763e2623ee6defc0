//! Classical fourth-order Runge-Kutta (RK4) solver for ODE systems.
//!
//! Each step samples the derivative four times and combines the samples with
//! the textbook weights:
//!
//! ```text
//! K1 = f(S0)
//! K2 = f(S0 + K1·h/2)
//! K3 = f(S0 + K2·h/2)
//! K4 = f(S0 + K3·h)
//! S  = S0 + (K1 + 2·K2 + 2·K3 + K4)·h/6
//! ```
//!
//! Component 0 of every state is elapsed time and its derivative is `1.0`,
//! so each step advances time by exactly `h`.
//!
//! The step size is fixed. There is no error estimate and no adaptive control.
//!
//! # Example
//!
//! ```
//! use kinetic_core::StateVector;
//! use kinetic_solvers::transient::rk4::Rk4;
//!
//! // dx/dt = 2t, so x(t) = t².
//! let ramp = |_n: usize, s: &StateVector| StateVector::from([1.0, 2.0 * s.time()]);
//!
//! let engine = Rk4::initialize(1.0, 2)?;
//! let next = engine.step(&StateVector::from([0.0, 0.0]), &ramp)?;
//!
//! assert_eq!(next.time(), 1.0);
//! assert_eq!(next[1], 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Error, Stage};
pub use event::Event;
pub use solution::{Solution, Status};

use kinetic_core::{Observer, OdeSystem, StateVector, StepIntegrable};

/// Upper bound on the history capacity reserved before `solve` starts.
const MAX_PREALLOCATED_STATES: usize = 4096;

/// A fixed-step RK4 engine for state vectors of a single length.
///
/// The engine holds only its [`Config`]. Each [`step`](Rk4::step) returns a
/// fresh state and leaves its input untouched, so one engine can be reused for
/// any number of steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rk4 {
    config: Config,
}

impl Rk4 {
    /// Creates an engine from a validated config.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates an engine with step size `h` for vectors of length `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if `h` is not finite and positive, or if `n` is zero.
    pub fn initialize(h: f64, n: usize) -> Result<Self, ConfigError> {
        Config::new(h, n).map(Self::new)
    }

    /// Replaces the step size and vector length.
    ///
    /// The engine is left unchanged if the new values are invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if `h` is not finite and positive, or if `n` is zero.
    pub fn reinitialize(&mut self, h: f64, n: usize) -> Result<(), ConfigError> {
        self.config = Config::new(h, n)?;
        Ok(())
    }

    /// Returns the engine's config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the step size `h`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.config.step_size()
    }

    /// Returns the state vector length `n`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.config.dimension()
    }

    /// Advances `s0` by one step of size `h`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateLength`] if `s0` does not have length `n`, or
    /// [`Error::DerivativeLength`] if the system returns a derivative of the
    /// wrong length.
    pub fn step<S>(&self, s0: &StateVector, system: &S) -> Result<StateVector, Error>
    where
        S: OdeSystem + ?Sized,
    {
        let n = self.dimension();
        let h = self.step_size();

        if s0.len() != n {
            return Err(Error::StateLength {
                expected: n,
                found: s0.len(),
            });
        }

        let k1 = self.sample(system, s0, Stage::K1)?;
        let k2 = self.sample(system, &s0.step(&k1, 0.5 * h), Stage::K2)?;
        let k3 = self.sample(system, &s0.step(&k2, 0.5 * h), Stage::K3)?;
        let k4 = self.sample(system, &s0.step(&k3, h), Stage::K4)?;

        // Dividing the weighted sum before scaling by h keeps dt/dt = 1 exact.
        Ok((0..n)
            .map(|i| {
                let slope = (k1[i] + 2.0 * (k2[i] + k3[i]) + k4[i]) / 6.0;
                s0[i] + slope * h
            })
            .collect())
    }

    fn sample<S>(&self, system: &S, state: &StateVector, stage: Stage) -> Result<StateVector, Error>
    where
        S: OdeSystem + ?Sized,
    {
        let n = self.dimension();
        let derivative = system.derivative(n, state);

        if derivative.len() != n {
            return Err(Error::DerivativeLength {
                stage,
                expected: n,
                found: derivative.len(),
            });
        }

        Ok(derivative)
    }
}

/// Integrates an ODE system for a fixed number of RK4 steps.
///
/// # Algorithm
///
/// 1. Emit an [`Event`] for the initial state (step 0).
/// 2. For each step:
///    - Advance the current state with [`Rk4::step`].
///    - Record the new state in the history.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state and after each
/// integration step, and may return [`Action::StopEarly`] to terminate early.
///
/// # Errors
///
/// Returns an error if the initial state or any derivative sample has the
/// wrong length.
pub fn solve<S, Obs>(
    engine: &Rk4,
    system: &S,
    initial: StateVector,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: OdeSystem + ?Sized,
    Obs: Observer<Event, Action>,
{
    let n = engine.dimension();
    if initial.len() != n {
        return Err(Error::StateLength {
            expected: n,
            found: initial.len(),
        });
    }

    tracing::debug!(
        step_size = engine.step_size(),
        dimension = n,
        steps,
        t0 = initial.time(),
        "starting rk4 integration"
    );

    // `steps` may be an upper bound for an observer-stopped run.
    let mut history = Vec::with_capacity(steps.saturating_add(1).min(MAX_PREALLOCATED_STATES));
    history.push(initial.clone());

    let event = Event {
        step: 0,
        state: initial.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        tracing::debug!(steps = 0, "rk4 integration stopped by observer");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial;

    for step in 1..=steps {
        let next = engine.step(&current, system)?;
        tracing::trace!(step, t = next.time(), "rk4 step");

        history.push(next.clone());

        let event = Event {
            step,
            state: next.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            tracing::debug!(steps = step, "rk4 integration stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next;
    }

    tracing::debug!(steps, t = current.time(), "rk4 integration complete");

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE system with RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the initial state or any derivative sample has the
/// wrong length.
pub fn solve_unobserved<S>(
    engine: &Rk4,
    system: &S,
    initial: StateVector,
    steps: usize,
) -> Result<Solution, Error>
where
    S: OdeSystem + ?Sized,
{
    solve(engine, system, initial, steps, ())
}
