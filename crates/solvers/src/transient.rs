//! Solvers for transient problems, which step a state forward in time.
//!
//! An [`OdeSystem`] maps a [`StateVector`] `[t, y₁, …]` to its derivative
//! `[1, dy₁/dt, …]`. Solvers in this module advance the state by a fixed step
//! size, one step per call.
//!
//! # Solvers
//!
//! - [`rk4`] — classical fourth-order Runge-Kutta
//!
//! [`OdeSystem`]: kinetic_core::OdeSystem
//! [`StateVector`]: kinetic_core::StateVector

pub mod rk4;
