/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets generic fixed-step solvers advance the type
/// via `self + derivative * delta`, where the derivative is taken with respect
/// to `Delta`. Multi-stage methods such as RK4 call this repeatedly from the
/// same base value with different derivative samples, so the derivative is
/// borrowed rather than consumed.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Displacement(f64);
    struct Velocity(f64);

    impl StepIntegrable<f64> for Displacement {
        type Derivative = Velocity;

        fn step(&self, derivative: &Velocity, delta: f64) -> Self {
            Displacement(self.0 + derivative.0 * delta)
        }
    }

    #[test]
    fn step_scalar_state() {
        let x = Displacement(1.0);
        let v = Velocity(-2.0);

        assert_eq!(x.step(&v, 0.25), Displacement(0.5));
    }

    #[test]
    fn same_derivative_can_be_reused() {
        let x = Displacement(0.0);
        let v = Velocity(4.0);

        let half: DerivativeOf<Displacement, f64> = Velocity(v.0);
        assert_eq!(x.step(&half, 0.5), Displacement(2.0));
        assert_eq!(x.step(&v, 1.0), Displacement(4.0));
    }
}
