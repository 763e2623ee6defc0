//! Reusable observers for the kinetic solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across transient solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TrajectoryRecorder`] — collects `(t, y)` samples of chosen state
//!   components
//! - [`PlotObserver`] — collects traces and shows them in an egui window
//!   (requires the `plot` feature)
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing trajectories via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: kinetic_core::Observer
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;

#[cfg(feature = "plot")]
mod plot;

pub use recorder::TrajectoryRecorder;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig};
