//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that solvers, models, and
//! observers build on:
//!
//! - [`StateVector`] — an ordered `[t, y₁, …, yₙ₋₁]` state whose first
//!   component is always elapsed time
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`
//! - [`OdeSystem`] — a first-order ODE system that maps a state to its time
//!   derivative
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod state;
mod step;
mod system;

pub use observer::Observer;
pub use state::StateVector;
pub use step::{DerivativeOf, StepIntegrable};
pub use system::OdeSystem;
