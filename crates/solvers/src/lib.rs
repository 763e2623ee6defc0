//! Fixed-step solvers for ODE systems defined with `kinetic-core`.
//!
//! # Modules
//!
//! - [`transient`] — time integration of [`OdeSystem`]s
//!
//! [`OdeSystem`]: kinetic_core::OdeSystem

pub mod transient;
