use std::rc::Rc;

/// Observer of a subject `S`, notified with an event payload.
pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E);
}

/// Observable source publishing events of type `E`.
pub trait Subject<E: Clone> {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);
    fn notify_observers(&self, event: E);
}

/// Observer collection held by a subject.
pub type SharedObservers<S, E> = Vec<Rc<dyn Observer<S, E>>>;
