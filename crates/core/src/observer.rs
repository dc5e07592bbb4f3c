/// Hook called by an iterative minimizer after each iteration.
///
/// The event type `E` describes the solver's state, such as the golden-section
/// bracket after a reduction, and `A` is the set of actions the solver accepts
/// in return. Returning `None` keeps the solver running. Golden-section search,
/// for instance, halts and reports its current bracket when it gets back
/// `Some(Action::StopEarly)`.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` to run
/// without one.
pub trait Observer<E, A> {
    /// Handles one event, optionally asking the solver to act on it.
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

/// Ignores every event.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<usize, bool>>(mut observer: O, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event) == Some(true))
    }

    #[test]
    fn closure_observer_receives_every_event() {
        let mut seen = Vec::new();
        let stopped_at = drive(
            |event: &usize| {
                seen.push(*event);
                (*event == 3).then_some(true)
            },
            10,
        );

        assert_eq!(stopped_at, Some(3));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }
}
