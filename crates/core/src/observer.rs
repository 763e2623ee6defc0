/// Receives solver events and optionally returns a control action.
///
/// Solvers call [`observe`](Observer::observe) once per event. Returning
/// `None` lets the solver continue; returning `Some(action)` asks the solver to
/// act on it (for example, to stop early).
///
/// Closures of the form `FnMut(&E) -> Option<A>` and the unit type `()` are
/// both observers, so most callers never implement this trait by hand.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that never returns an action.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Halt,
    }

    fn drive<O: Observer<u32, Action>>(mut observer: O, events: &[u32]) -> Option<u32> {
        events
            .iter()
            .find(|&&event| observer.observe(&event) == Some(Action::Halt))
            .copied()
    }

    #[test]
    fn closure_observer_can_halt() {
        let halted_at = drive(|e: &u32| (*e >= 3).then_some(Action::Halt), &[1, 2, 3, 4]);
        assert_eq!(halted_at, Some(3));
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_can_capture_state() {
        let mut seen = Vec::new();
        drive(
            |e: &u32| {
                seen.push(*e);
                None
            },
            &[5, 6],
        );
        assert_eq!(seen, vec![5, 6]);
    }
}
