use kinetic_core::StateVector;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK4 integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// States from each step, including the initial state.
    pub history: Vec<StateVector>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the `(t, y)` samples of state component `index`.
    ///
    /// States that lack the component are skipped.
    #[must_use]
    pub fn samples(&self, index: usize) -> Vec<(f64, f64)> {
        self.history
            .iter()
            .filter_map(|state| state.component(index).map(|y| (state.time(), y)))
            .collect()
    }
}
