use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Length, Mass, MassRate},
        length::meter,
        mass::kilogram,
        mass_rate::kilogram_per_second,
    },
    typenum::{N2, P1, Z0},
};

use super::{
    Error, Property,
    error::{ensure_finite, ensure_non_negative, ensure_positive},
};

/// Gravitational acceleration applied when gravity is enabled, in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Stiffness is a force per unit length (N/m or kg/s²).
pub type Stiffness = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Physical parameters of a mass-spring-damper, in SI units.
///
/// Build from the [`Default`] (unit mass and stiffness, no damping, gravity
/// on) with the chained setters, which accept either `uom` quantities or raw
/// SI values:
///
/// ```
/// use kinetic_models::mass_spring_damper::Parameters;
/// use uom::si::{f64::Mass, mass::kilogram};
///
/// let params = Parameters::default()
///     .mass(Mass::new::<kilogram>(2.0))
///     .spring_constant_si(8.0)
///     .damping_coefficient_si(0.5);
///
/// assert_eq!(params.mass, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Mass `m` in kg. Must be positive.
    pub mass: f64,

    /// Spring constant `k` in N/m. Must be positive.
    pub spring_constant: f64,

    /// Damping coefficient `c` in kg/s. Must be non-negative.
    pub damping_coefficient: f64,

    /// Unstressed spring length in m. Informational only.
    pub unsprung_length: f64,

    /// Whether gravity acts on the mass in the +x direction.
    pub gravity: bool,
}

impl Parameters {
    /// Sets mass from a `uom::Mass`.
    #[must_use]
    pub fn mass(self, mass: Mass) -> Self {
        self.mass_si(mass.get::<kilogram>())
    }

    /// Sets mass in SI units (kg).
    #[must_use]
    pub fn mass_si(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the spring constant from a [`Stiffness`] quantity.
    #[must_use]
    pub fn spring_constant(self, stiffness: Stiffness) -> Self {
        // `value` is stored in SI base units, kg/s² = N/m.
        self.spring_constant_si(stiffness.value)
    }

    /// Sets the spring constant in SI units (N/m).
    #[must_use]
    pub fn spring_constant_si(mut self, spring_constant: f64) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    /// Sets the damping coefficient from a `uom::MassRate` (N·s/m = kg/s).
    #[must_use]
    pub fn damping_coefficient(self, damping: MassRate) -> Self {
        self.damping_coefficient_si(damping.get::<kilogram_per_second>())
    }

    /// Sets the damping coefficient in SI units (kg/s).
    #[must_use]
    pub fn damping_coefficient_si(mut self, damping_coefficient: f64) -> Self {
        self.damping_coefficient = damping_coefficient;
        self
    }

    /// Sets the unstressed spring length from a `uom::Length`.
    #[must_use]
    pub fn unsprung_length(self, length: Length) -> Self {
        self.unsprung_length_si(length.get::<meter>())
    }

    /// Sets the unstressed spring length in SI units (m).
    #[must_use]
    pub fn unsprung_length_si(mut self, length: f64) -> Self {
        self.unsprung_length = length;
        self
    }

    /// Enables or disables gravity.
    #[must_use]
    pub fn gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    /// Returns the gravitational acceleration `g` implied by the gravity flag.
    #[must_use]
    pub fn gravitational_acceleration(&self) -> f64 {
        if self.gravity { STANDARD_GRAVITY } else { 0.0 }
    }

    /// Checks that every parameter is in its valid range.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter that is non-finite, or
    /// that violates `m > 0`, `k > 0`, or `c ≥ 0`.
    pub fn validate(&self) -> Result<(), Error> {
        ensure_positive(Property::Mass, self.mass)?;
        ensure_positive(Property::SpringConstant, self.spring_constant)?;
        ensure_non_negative(Property::DampingCoefficient, self.damping_coefficient)?;
        ensure_finite(Property::UnsprungLength, self.unsprung_length)?;
        Ok(())
    }
}

impl Default for Parameters {
    /// Unit mass and stiffness, no damping, zero length, gravity on.
    fn default() -> Self {
        Self {
            mass: 1.0,
            spring_constant: 1.0,
            damping_coefficient: 0.0,
            unsprung_length: 0.0,
            gravity: true,
        }
    }
}
