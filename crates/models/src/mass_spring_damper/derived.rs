use super::Parameters;

/// Quantities computed from [`Parameters`].
///
/// ```text
/// ωn   = sqrt(k/m)        undamped natural frequency
/// ζ    = c / (2·m·ωn)     damping ratio
/// x_ss = g·(m/k)          steady-state displacement (v = 0, a = 0)
/// C1   = c/m              velocity coefficient of the equation of motion
/// C2   = k/m              displacement coefficient of the equation of motion
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    pub natural_frequency: f64,
    pub damping_ratio: f64,
    pub steady_state: f64,
    pub damping_term: f64,
    pub stiffness_term: f64,
}

impl DerivedQuantities {
    /// Computes the derived quantities for a set of parameters.
    ///
    /// The parameters are assumed valid (`m > 0`, `k > 0`); see
    /// [`Parameters::validate`].
    #[must_use]
    pub fn from_parameters(parameters: &Parameters) -> Self {
        let Parameters {
            mass: m,
            spring_constant: k,
            damping_coefficient: c,
            ..
        } = *parameters;
        let g = parameters.gravitational_acceleration();

        let natural_frequency = (k / m).sqrt();

        Self {
            natural_frequency,
            damping_ratio: c / (2.0 * m * natural_frequency),
            steady_state: g * (m / k),
            damping_term: c / m,
            stiffness_term: k / m,
        }
    }
}
