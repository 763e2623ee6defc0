use crate::StateVector;

/// A system of first-order ordinary differential equations.
///
/// Given the vector length `n` and a state `S = [t, y₁, …]`, an `OdeSystem`
/// returns the time derivative `dS = [1, dy₁/dt, …]` of the same length.
///
/// Implementations must uphold two rules that solvers rely on but do not
/// check:
///
/// - component 0 of every derivative is exactly `1.0`, so integrating it
///   yields elapsed time
/// - the derivative is a pure function of `state`, with no side effects
///   observable across calls
///
/// Any closure `Fn(usize, &StateVector) -> StateVector` is an `OdeSystem`.
pub trait OdeSystem {
    /// Returns the time derivative of `state`.
    fn derivative(&self, n: usize, state: &StateVector) -> StateVector;
}

impl<F> OdeSystem for F
where
    F: Fn(usize, &StateVector) -> StateVector,
{
    fn derivative(&self, n: usize, state: &StateVector) -> StateVector {
        self(n, state)
    }
}
