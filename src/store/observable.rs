use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    /// Keeps the upstream wiring of a derived observable alive.
    _source: Option<Subscription>,
}

/// A single-threaded observable value.
///
/// `subscribe` replays the current value once, then delivers every
/// subsequent [`set`](Observable::set) synchronously, in subscription
/// order. Cloning an `Observable` clones the handle, not the value; all
/// clones share the same state and subscriber registry.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                _source: None,
            })),
        }
    }

    /// Latest value. Never blocks.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replaces the value and synchronously notifies every current
    /// subscriber with the new value, in subscription order.
    ///
    /// Delivery iterates a snapshot of the registry, so callbacks may
    /// subscribe or unsubscribe during the pass; a subscriber removed by
    /// an earlier callback in the same pass is skipped. No validation is
    /// performed on `value`.
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.subscribers.clone()
        };

        for (id, callback) in snapshot {
            let live = self
                .inner
                .borrow()
                .subscribers
                .iter()
                .any(|(sid, _)| *sid == id);
            if live {
                (callback.borrow_mut())(&value);
            }
        }
    }

    /// Registers `callback`, invoking it immediately with the current
    /// value and again on every subsequent [`set`](Observable::set).
    ///
    /// Dropping the returned handle (or calling
    /// [`Subscription::unsubscribe`]) stops further notifications.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            id
        };

        let current = self.get();
        (callback.borrow_mut())(&current);

        Subscription::new(Rc::downgrade(&self.inner), id)
    }

    /// Derived stream: re-evaluates the pure `project`ion on each
    /// upstream notification and forwards the result to the returned
    /// observable's own subscribers. The upstream subscription stays
    /// alive for as long as the derived observable does.
    pub fn map<U, F>(&self, project: F) -> Observable<U>
    where
        U: Clone + 'static,
        F: Fn(&T) -> U + 'static,
    {
        let derived = Observable::new(project(&self.get()));
        let sink = derived.clone();
        let subscription = self.subscribe(move |value| sink.set(project(value)));
        derived.inner.borrow_mut()._source = Some(subscription);
        derived
    }
}

/// Handle returned by [`Observable::subscribe`]. Releasing it stops
/// further notifications for that subscriber.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new<T: 'static>(target: Weak<RefCell<Inner<T>>>, id: u64) -> Self {
        Self {
            cancel: Some(Box::new(move || {
                if let Some(inner) = target.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    /// Stops further notifications. Idempotent, and a no-op once the
    /// observable itself is gone.
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
