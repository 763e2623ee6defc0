//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with any transient solver that implements them.
//!
//! # Event traits
//!
//! - [`HasState`] — events that carry a state vector `[t, y₁, …]`
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use kinetic_core::Observer;
//! use kinetic_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops the run once simulated time reaches `t_end`.
//! struct Until {
//!     t_end: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Until {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.t_end).then(A::stop_early)
//!     }
//! }
//! ```

use kinetic_core::StateVector;
use kinetic_solvers::transient::rk4;

/// An event that carries a state vector.
pub trait HasState {
    /// Returns the state for this event.
    fn state(&self) -> &StateVector;

    /// Returns the elapsed time, component 0 of the state.
    fn time(&self) -> f64 {
        self.state().time()
    }

    /// Returns component `index` of the state, if present.
    fn component(&self, index: usize) -> Option<f64> {
        self.state().component(index)
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasState for rk4::Event {
    fn state(&self) -> &StateVector {
        &self.state
    }
}

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
