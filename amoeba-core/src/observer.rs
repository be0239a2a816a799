/// Watches an optimization run between iterations.
///
/// The simplex search reports after every iteration and Powell's method after
/// every sweep that does not finish the run; each solver defines its own event
/// type `E` carrying the current best point, the evaluation count, and the
/// solver's working state. An observer sees that state read-only and answers
/// with `Some(action)` from the solver's action type `A` (typically a request
/// to stop and keep the best point so far) or `None` to let the run go on.
///
/// An `FnMut(&E) -> Option<A>` closure can serve as an observer, which is
/// enough for recording progress in a test. `()` observes nothing and is what
/// the `*_unobserved` entry points pass.
pub trait Observer<E, A> {
    /// Inspects the latest solver state; `Some(action)` steers the run.
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

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<Obs: Observer<usize, &'static str>>(mut observer: Obs) -> Option<usize> {
        (1..=10).find(|step| observer.observe(step).is_some())
    }

    #[test]
    fn unit_never_intervenes() {
        assert_eq!(drive(()), None);
    }

    #[test]
    fn closures_can_request_actions() {
        let mut seen = 0;
        let stopped_at = drive(|step: &usize| {
            seen += 1;
            (*step == 4).then_some("stop")
        });

        assert_eq!(stopped_at, Some(4));
        assert_eq!(seen, 4);
    }
}
