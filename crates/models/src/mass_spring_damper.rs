//! An ideal mass-spring-damper under optional gravity.
//!
//! Gravity acts on the mass in the +x direction, the damper opposes velocity,
//! and the spring opposes displacement. With `F = ma`:
//!
//! ```text
//! m·a = m·g − c·v − k·x    ⇒    a = g − (C1·v + C2·x),   C1 = c/m, C2 = k/m
//! ```
//!
//! Written as first-order equations over the state `S = [t, x, v]`:
//!
//! ```text
//! dS = [1, v, g − (C1·v + C2·x)]
//! ```
//!
//! [`MassSpringDamper`] implements [`OdeSystem`] with that derivative, keeps
//! its [`DerivedQuantities`] and [`DampingCase`] in sync with every setter,
//! and exposes the exact solution through the [`damping`] module.

pub mod damping;

mod derived;
mod error;
mod parameters;
mod property;

pub use damping::{Characteristics, ClassifierConfig, DampingCase, Regime};
pub use derived::DerivedQuantities;
pub use error::Error;
pub use parameters::{Parameters, STANDARD_GRAVITY, Stiffness};
pub use property::Property;

use kinetic_core::{OdeSystem, StateVector};

use error::{ensure_finite, ensure_non_negative, ensure_positive};

/// Initial displacement `x0` and velocity `v0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialConditions {
    pub displacement: f64,
    pub velocity: f64,
}

/// A mass-spring-damper system with its current state.
///
/// Every setter validates its input and, on success, synchronously recomputes
/// the derived quantities and the damping case, so neither is ever stale. A
/// rejected value leaves the model unchanged.
///
/// Changing a parameter does not move the initial displacement. After
/// `set_mass`, for example, `x0` generally no longer equals the new `x_ss`
/// and a damped system reports no closed form until the initial conditions
/// are reset.
///
/// # Example
///
/// ```
/// use kinetic_models::mass_spring_damper::{MassSpringDamper, Parameters, Regime};
///
/// let mut msd = MassSpringDamper::new(Parameters::default())?;
/// msd.set_damping_coefficient(2.0)?;
///
/// let case = msd.damping_case();
/// assert_eq!(case.regime(), Regime::CriticallyDamped);
/// assert_eq!(case.evaluate(0.0), Some(msd.steady_state()));
/// # Ok::<(), kinetic_models::mass_spring_damper::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MassSpringDamper {
    parameters: Parameters,
    derived: DerivedQuantities,
    initial: InitialConditions,
    state: StateVector,
    classifier: ClassifierConfig,
    damping_case: DampingCase,
}

impl MassSpringDamper {
    /// Length of the state vector `[t, x, v]`.
    pub const DIMENSION: usize = 3;

    /// Creates a model at rest in its steady state, `[0, x_ss, 0]`.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range; see
    /// [`Parameters::validate`].
    pub fn new(parameters: Parameters) -> Result<Self, Error> {
        parameters.validate()?;

        let derived = DerivedQuantities::from_parameters(&parameters);
        let initial = InitialConditions {
            displacement: derived.steady_state,
            velocity: 0.0,
        };
        let classifier = ClassifierConfig::default();
        let damping_case = damping::classify_characteristics(
            &characteristics(&parameters, &derived, &initial),
            &classifier,
        );

        let model = Self {
            parameters,
            derived,
            initial,
            state: initial_state(&initial),
            classifier,
            damping_case,
        };
        model.log_recompute();

        Ok(model)
    }

    // --- Parameters ---

    /// Returns the mass `m`.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.parameters.mass
    }

    /// Returns the spring constant `k`.
    #[must_use]
    pub fn spring_constant(&self) -> f64 {
        self.parameters.spring_constant
    }

    /// Returns the damping coefficient `c`.
    #[must_use]
    pub fn damping_coefficient(&self) -> f64 {
        self.parameters.damping_coefficient
    }

    /// Returns the unstressed spring length.
    #[must_use]
    pub fn unsprung_length(&self) -> f64 {
        self.parameters.unsprung_length
    }

    /// Returns the gravitational acceleration `g` (9.81 or 0).
    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.parameters.gravitational_acceleration()
    }

    /// Returns `true` if gravity is enabled.
    #[must_use]
    pub fn gravity_enabled(&self) -> bool {
        self.parameters.gravity
    }

    /// Returns all parameters.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Sets the mass.
    ///
    /// # Errors
    ///
    /// Returns an error if `mass` is not finite and positive.
    pub fn set_mass(&mut self, mass: f64) -> Result<(), Error> {
        self.parameters.mass = ensure_positive(Property::Mass, mass)?;
        self.recompute();
        Ok(())
    }

    /// Sets the spring constant.
    ///
    /// # Errors
    ///
    /// Returns an error if `spring_constant` is not finite and positive.
    pub fn set_spring_constant(&mut self, spring_constant: f64) -> Result<(), Error> {
        self.parameters.spring_constant =
            ensure_positive(Property::SpringConstant, spring_constant)?;
        self.recompute();
        Ok(())
    }

    /// Sets the damping coefficient.
    ///
    /// # Errors
    ///
    /// Returns an error if `damping_coefficient` is negative or not finite.
    pub fn set_damping_coefficient(&mut self, damping_coefficient: f64) -> Result<(), Error> {
        self.parameters.damping_coefficient =
            ensure_non_negative(Property::DampingCoefficient, damping_coefficient)?;
        self.recompute();
        Ok(())
    }

    /// Sets the unstressed spring length. No other quantity depends on it.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is not finite.
    pub fn set_unsprung_length(&mut self, length: f64) -> Result<(), Error> {
        self.parameters.unsprung_length = ensure_finite(Property::UnsprungLength, length)?;
        Ok(())
    }

    /// Enables or disables gravity.
    pub fn set_gravity(&mut self, gravity: bool) {
        self.parameters.gravity = gravity;
        self.recompute();
    }

    // --- Derived quantities ---

    /// Returns the derived quantities for the current parameters.
    #[must_use]
    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// Returns the undamped natural frequency `ωn`.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        self.derived.natural_frequency
    }

    /// Returns the damping ratio `ζ`.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.derived.damping_ratio
    }

    /// Returns the steady-state displacement `x_ss`.
    #[must_use]
    pub fn steady_state(&self) -> f64 {
        self.derived.steady_state
    }

    // --- Initial conditions and state ---

    /// Returns the initial conditions.
    #[must_use]
    pub fn initial_conditions(&self) -> InitialConditions {
        self.initial
    }

    /// Replaces the initial conditions and resets the state to `[0, x0, v0]`.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not finite.
    pub fn set_initial_conditions(&mut self, x0: f64, v0: f64) -> Result<(), Error> {
        let initial = InitialConditions {
            displacement: ensure_finite(Property::InitialDisplacement, x0)?,
            velocity: ensure_finite(Property::InitialVelocity, v0)?,
        };
        self.initial = initial;
        self.state = initial_state(&initial);
        self.refresh_case();
        Ok(())
    }

    /// Resets to rest at the current steady state, `[0, x_ss, 0]`.
    pub fn reset_to_steady_state(&mut self) {
        self.initial = InitialConditions {
            displacement: self.derived.steady_state,
            velocity: 0.0,
        };
        self.state = initial_state(&self.initial);
        self.refresh_case();
    }

    /// Returns the current state `[t, x, v]`.
    #[must_use]
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Replaces the current state, typically with the result of a solver step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateLength`] if `state` is not `[t, x, v]`.
    pub fn set_state(&mut self, state: StateVector) -> Result<(), Error> {
        if state.len() != Self::DIMENSION {
            return Err(Error::StateLength { found: state.len() });
        }
        self.state = state;
        Ok(())
    }

    // --- Damping case ---

    /// Returns the classifier configuration.
    #[must_use]
    pub fn classifier_config(&self) -> &ClassifierConfig {
        &self.classifier
    }

    /// Replaces the classifier configuration and refreshes the damping case.
    pub fn set_classifier_config(&mut self, config: ClassifierConfig) {
        self.classifier = config;
        self.refresh_case();
    }

    /// Returns the damping case for the current parameters and initial
    /// conditions.
    #[must_use]
    pub fn damping_case(&self) -> &DampingCase {
        &self.damping_case
    }

    /// Returns the classifier inputs for the current parameters and initial
    /// conditions.
    #[must_use]
    pub fn characteristics(&self) -> Characteristics {
        characteristics(&self.parameters, &self.derived, &self.initial)
    }

    fn recompute(&mut self) {
        self.derived = DerivedQuantities::from_parameters(&self.parameters);
        self.refresh_case();
    }

    fn refresh_case(&mut self) {
        self.damping_case =
            damping::classify_characteristics(&self.characteristics(), &self.classifier);
        self.log_recompute();
    }

    fn log_recompute(&self) {
        tracing::debug!(
            natural_frequency = self.derived.natural_frequency,
            damping_ratio = self.derived.damping_ratio,
            steady_state = self.derived.steady_state,
            case = self.damping_case.case_label(),
            form = self.damping_case.form_label(),
            "mass-spring-damper updated"
        );
    }
}

impl OdeSystem for MassSpringDamper {
    /// Returns `[1, v, g − (C1·v + C2·x)]` for `state = [t, x, v]`.
    ///
    /// The result has length 3 and `n` is not consulted. A state without
    /// `x` and `v` yields an empty derivative, which a solver expecting
    /// length `n` reports as a length mismatch.
    fn derivative(&self, _n: usize, state: &StateVector) -> StateVector {
        let (Some(x), Some(v)) = (state.component(1), state.component(2)) else {
            return StateVector::default();
        };
        let DerivedQuantities {
            damping_term,
            stiffness_term,
            ..
        } = self.derived;

        StateVector::from([1.0, v, self.gravity() - (damping_term * v + stiffness_term * x)])
    }
}

fn characteristics(
    parameters: &Parameters,
    derived: &DerivedQuantities,
    initial: &InitialConditions,
) -> Characteristics {
    Characteristics {
        damping_coefficient: parameters.damping_coefficient,
        natural_frequency: derived.natural_frequency,
        damping_ratio: derived.damping_ratio,
        steady_state: derived.steady_state,
        initial_displacement: initial.displacement,
        initial_velocity: initial.velocity,
    }
}

fn initial_state(initial: &InitialConditions) -> StateVector {
    StateVector::from([0.0, initial.displacement, initial.velocity])
}
