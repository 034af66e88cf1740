/// Watches a drain run step by step.
///
/// The solver hands each completed step to [`observe`](Observer::observe)
/// right after recording it. Returning `Some(action)` asks the solver to
/// act on that step, for example to stop with the trajectory recorded so
/// far.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` watches
/// nothing and never acts.
pub trait Observer<E, A> {
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
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
