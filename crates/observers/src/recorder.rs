use kinetic_core::Observer;

use crate::traits::HasState;

/// Records `(t, y)` pairs for selected state components as a run progresses.
///
/// Pass `&mut recorder` as the observer so the samples remain available after
/// the solve returns. The recorder never requests an action.
///
/// # Example
///
/// ```
/// use kinetic_core::StateVector;
/// use kinetic_observers::TrajectoryRecorder;
/// use kinetic_solvers::transient::rk4::{self, Rk4};
///
/// let ramp = |_n: usize, s: &StateVector| StateVector::from([1.0, 2.0 * s.time()]);
/// let engine = Rk4::initialize(0.5, 2)?;
///
/// let mut recorder = TrajectoryRecorder::new([1]);
/// rk4::solve(&engine, &ramp, StateVector::zeros(2), 2, &mut recorder)?;
///
/// assert_eq!(recorder.samples(0), [(0.0, 0.0), (0.5, 0.25), (1.0, 1.0)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TrajectoryRecorder<const N: usize> {
    components: [usize; N],
    samples: [Vec<(f64, f64)>; N],
}

impl<const N: usize> TrajectoryRecorder<N> {
    /// Creates a recorder for the given state component indices.
    #[must_use]
    pub fn new(components: [usize; N]) -> Self {
        Self {
            components,
            samples: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Returns the samples recorded for the `trace`-th requested component.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    #[must_use]
    pub fn samples(&self, trace: usize) -> &[(f64, f64)] {
        &self.samples[trace]
    }

    /// Consumes the recorder and returns all traces.
    #[must_use]
    pub fn into_samples(self) -> [Vec<(f64, f64)>; N] {
        self.samples
    }

    fn record(&mut self, event: &impl HasState) {
        let t = event.time();
        for (samples, &index) in self.samples.iter_mut().zip(&self.components) {
            if let Some(y) = event.component(index) {
                samples.push((t, y));
            }
        }
    }
}

impl<const N: usize, E: HasState, A> Observer<E, A> for TrajectoryRecorder<N> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<const N: usize, E: HasState, A> Observer<E, A> for &mut TrajectoryRecorder<N> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kinetic_core::StateVector;
    use kinetic_solvers::transient::rk4::Event;

    fn event(state: [f64; 3]) -> Event {
        Event {
            step: 0,
            state: StateVector::from(state),
        }
    }

    fn feed<const N: usize>(recorder: &mut TrajectoryRecorder<N>, state: [f64; 3]) {
        let _: Option<()> = recorder.observe(&event(state));
    }

    #[test]
    fn records_each_requested_component() {
        let mut recorder = TrajectoryRecorder::new([1, 2]);

        feed(&mut recorder, [0.0, 1.0, 2.0]);
        feed(&mut recorder, [0.1, 1.5, 2.5]);

        assert_eq!(recorder.samples(0), [(0.0, 1.0), (0.1, 1.5)]);
        assert_eq!(recorder.samples(1), [(0.0, 2.0), (0.1, 2.5)]);
    }

    #[test]
    fn skips_components_missing_from_the_state() {
        let mut recorder = TrajectoryRecorder::new([1, 5]);

        feed(&mut recorder, [0.0, 1.0, 2.0]);

        assert_eq!(recorder.samples(0), [(0.0, 1.0)]);
        assert!(recorder.samples(1).is_empty());
    }

    #[test]
    fn never_returns_an_action() {
        let mut recorder = TrajectoryRecorder::new([1]);
        let action: Option<()> = recorder.observe(&event([0.0, 1.0, 2.0]));
        assert!(action.is_none());
    }

    #[test]
    fn into_samples_returns_all_traces() {
        let mut recorder = TrajectoryRecorder::new([0]);
        feed(&mut recorder, [0.5, 1.0, 2.0]);

        let [times] = recorder.into_samples();

        assert_eq!(times, vec![(0.5, 0.5)]);
    }
}
