use std::ops::Deref;

use crate::StepIntegrable;

/// An ordered state `[t, y₁, …, yₙ₋₁]` of fixed length `n`.
///
/// Component 0 is always elapsed time; the remaining components are the
/// physical state of the system (for a mass-spring-damper, `[t, x, v]`).
/// The same type is used for time derivatives, where component 0 is `1.0`.
///
/// A `StateVector` derefs to `[f64]`, so indexing, iteration, and `len` work
/// as they do on a slice.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StateVector(Vec<f64>);

impl StateVector {
    /// Creates a state vector from its components.
    #[must_use]
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// Creates a state vector of `n` zeros.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.0; n])
    }

    /// Returns the elapsed time, or `0.0` for an empty vector.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.0.first().copied().unwrap_or(0.0)
    }

    /// Returns the component at `index`, if present.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Consumes the state vector and returns its components.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for StateVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for StateVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for StateVector {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[f64; N]> for StateVector {
    fn from(components: [f64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl FromIterator<f64> for StateVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Componentwise `S + dS * h`.
///
/// Both vectors are expected to have the same length; components past the
/// shorter one are dropped.
impl StepIntegrable<f64> for StateVector {
    type Derivative = StateVector;

    fn step(&self, derivative: &StateVector, delta: f64) -> Self {
        self.iter()
            .zip(derivative.iter())
            .map(|(s, ds)| s + ds * delta)
            .collect()
    }
}
