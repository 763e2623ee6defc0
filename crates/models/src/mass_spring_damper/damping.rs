//! Damping-regime classification and closed-form evaluation.
//!
//! [`classify`] selects one of four regimes from the damping coefficient `c`
//! and the damping ratio `ζ`, checked in this order:
//!
//! 1. `c == 0` → [`Regime::Undamped`]
//! 2. `ζ < 1`  → [`Regime::Underdamped`]
//! 3. `ζ > 1`  → [`Regime::Overdamped`]
//! 4. otherwise (`ζ == 1`) → [`Regime::CriticallyDamped`]
//!
//! The undamped regime always has a closed form. The other three have one
//! only for *free motion*, where the initial displacement equals the
//! steady-state displacement. Free motion is an exact floating-point equality
//! test unless a tolerance is configured with [`ClassifierConfig`].
//!
//! A regime without a closed form is not an error: [`DampingCase::evaluate`]
//! simply returns `None`.

mod closed_form;

pub use closed_form::{ClosedForm, CriticallyDamped, Overdamped, Underdamped, Undamped};

use std::fmt;

use super::{Error, MassSpringDamper};

/// Inputs to the damping-case classifier, snapshotted from a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Characteristics {
    /// Damping coefficient `c`.
    pub damping_coefficient: f64,
    /// Undamped natural frequency `ωn`.
    pub natural_frequency: f64,
    /// Damping ratio `ζ`.
    pub damping_ratio: f64,
    /// Steady-state displacement `x_ss`.
    pub steady_state: f64,
    /// Initial displacement `x0`.
    pub initial_displacement: f64,
    /// Initial velocity `v0`.
    pub initial_velocity: f64,
}

/// Classifier configuration.
///
/// The default tolerance of `0.0` makes free motion an exact equality test,
/// `x0 == x_ss`. A positive tolerance relaxes it to `|x0 − x_ss| ≤ tol`,
/// which changes which cases report a closed form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassifierConfig {
    free_motion_tolerance: f64,
}

impl ClassifierConfig {
    /// Creates a config with the given free-motion tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if the tolerance is negative or
    /// not finite.
    pub fn new(free_motion_tolerance: f64) -> Result<Self, Error> {
        if !free_motion_tolerance.is_finite() || free_motion_tolerance < 0.0 {
            return Err(Error::InvalidTolerance {
                value: free_motion_tolerance,
            });
        }
        Ok(Self {
            free_motion_tolerance,
        })
    }

    /// Returns the free-motion tolerance.
    #[must_use]
    pub fn free_motion_tolerance(&self) -> f64 {
        self.free_motion_tolerance
    }

    #[allow(clippy::float_cmp)]
    fn is_free_motion(&self, ch: &Characteristics) -> bool {
        if self.free_motion_tolerance == 0.0 {
            ch.initial_displacement == ch.steady_state
        } else {
            (ch.initial_displacement - ch.steady_state).abs() <= self.free_motion_tolerance
        }
    }
}

/// The damping regime of a mass-spring-damper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    Undamped,
    Underdamped,
    CriticallyDamped,
    Overdamped,
}

impl Regime {
    /// Returns the display label for the regime.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Regime::Undamped => "Undamped Case ( zeta = 0 )",
            Regime::Underdamped => "Underdamped case ( 0 < zeta < 1 )",
            Regime::CriticallyDamped => "Critically damped case ( zeta = 1 )",
            Regime::Overdamped => "Overdamped case ( zeta > 1 )",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The active damping case and, when one exists, its closed-form solution.
///
/// `None` inside a damped variant means the initial conditions are not free
/// motion and no closed form is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DampingCase {
    Undamped(Undamped),
    Underdamped(Option<Underdamped>),
    CriticallyDamped(Option<CriticallyDamped>),
    Overdamped(Option<Overdamped>),
}

/// Errors that can occur when sampling a closed-form solution.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum SampleError {
    #[error("sample step must be finite and positive, got {dt}")]
    InvalidStep { dt: f64 },
}

impl DampingCase {
    /// Returns the regime, regardless of whether a closed form exists.
    #[must_use]
    pub fn regime(&self) -> Regime {
        match self {
            DampingCase::Undamped(_) => Regime::Undamped,
            DampingCase::Underdamped(_) => Regime::Underdamped,
            DampingCase::CriticallyDamped(_) => Regime::CriticallyDamped,
            DampingCase::Overdamped(_) => Regime::Overdamped,
        }
    }

    /// Returns `true` if [`evaluate`](Self::evaluate) will produce values.
    #[must_use]
    pub fn has_closed_form(&self) -> bool {
        self.closed_form().is_some()
    }

    /// Returns the regime label, e.g. `"Undamped Case ( zeta = 0 )"`.
    #[must_use]
    pub fn case_label(&self) -> &'static str {
        self.regime().label()
    }

    /// Returns the solution-form label.
    #[must_use]
    pub fn form_label(&self) -> &'static str {
        match self {
            DampingCase::Undamped(_) => "(CLOSED FORM SOLUTION)",
            _ if self.has_closed_form() => "(FREE MOTION SOLUTION)",
            _ => "(*NO CLOSED FORM SOLUTION*)",
        }
    }

    /// Returns the closed-form solution, if one exists.
    #[must_use]
    pub fn closed_form(&self) -> Option<&dyn ClosedForm> {
        match self {
            DampingCase::Undamped(form) => Some(form as &dyn ClosedForm),
            DampingCase::Underdamped(form) => form.as_ref().map(|f| f as &dyn ClosedForm),
            DampingCase::CriticallyDamped(form) => form.as_ref().map(|f| f as &dyn ClosedForm),
            DampingCase::Overdamped(form) => form.as_ref().map(|f| f as &dyn ClosedForm),
        }
    }

    /// Returns the exact displacement at time `t`, or `None` if no closed form
    /// exists.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Option<f64> {
        self.closed_form().map(|form| form.displacement(t))
    }

    /// Samples the closed-form solution at `t_min, t_min + dt, …` up to and
    /// including `t_max`.
    ///
    /// Returns `Ok(None)` if no closed form exists, and an empty vector if
    /// `t_max < t_min`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidStep`] if `dt` is not finite and positive.
    pub fn sample(
        &self,
        t_min: f64,
        t_max: f64,
        dt: f64,
    ) -> Result<Option<Vec<(f64, f64)>>, SampleError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SampleError::InvalidStep { dt });
        }

        let Some(form) = self.closed_form() else {
            return Ok(None);
        };

        let samples = (0_u32..)
            .map(|i| t_min + f64::from(i) * dt)
            .take_while(|&t| t <= t_max)
            .map(|t| (t, form.displacement(t)))
            .collect();

        Ok(Some(samples))
    }
}

/// Classifies the model's current parameters and initial conditions.
///
/// This recomputes the case from scratch using the model's classifier config;
/// it always agrees with [`MassSpringDamper::damping_case`].
#[must_use]
pub fn classify(model: &MassSpringDamper) -> DampingCase {
    classify_characteristics(&model.characteristics(), model.classifier_config())
}

/// Classifies a set of characteristics.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn classify_characteristics(ch: &Characteristics, config: &ClassifierConfig) -> DampingCase {
    let free = config.is_free_motion(ch);

    if ch.damping_coefficient == 0.0 {
        DampingCase::Undamped(Undamped::new(ch))
    } else if ch.damping_ratio < 1.0 {
        DampingCase::Underdamped(free.then(|| Underdamped::new(ch)))
    } else if ch.damping_ratio > 1.0 {
        DampingCase::Overdamped(free.then(|| Overdamped::new(ch)))
    } else {
        DampingCase::CriticallyDamped(free.then(|| CriticallyDamped::new(ch)))
    }
}

/// Evaluates a damping case at time `t`.
///
/// Equivalent to [`DampingCase::evaluate`].
#[must_use]
pub fn evaluate(case: &DampingCase, t: f64) -> Option<f64> {
    case.evaluate(t)
}
