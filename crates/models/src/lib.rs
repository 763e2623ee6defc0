//! Physical models for the kinetic solvers.
//!
//! Each model implements [`OdeSystem`] so it can be integrated numerically,
//! and where possible also provides the exact solution for comparison.
//!
//! # Models
//!
//! - [`mass_spring_damper`] — a linear mass-spring-damper under optional
//!   gravity, with a damping-regime classifier and closed-form solutions
//!
//! [`OdeSystem`]: kinetic_core::OdeSystem

pub mod mass_spring_damper;
