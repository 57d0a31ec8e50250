//! Reactive value cells with change notification.

use std::fmt;

/// Token identifying a single observer registration on a [`Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

struct Registration<T> {
    id: ObserverId,
    observer: Observer<T>,
}

/// A mutable cell holding one value, notifying observers on replacement.
///
/// The contract is the standard reactive-cell one: an observer is invoked
/// synchronously once immediately upon subscribing with the current value,
/// then again on every replacement, in subscription order. The cell holds
/// no validation and enforces no invariants on its value.
pub struct Store<T> {
    value: T,
    observers: Vec<Registration<T>>,
    next_id: u64,
}

impl<T> Store<T> {
    /// Creates a store holding `initial`.
    pub const fn new(initial: T) -> Self {
        Self {
            value: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// The current value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value wholesale and notifies every observer.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify_all();
    }

    /// Mutates the value in place, then notifies every observer.
    pub fn update(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.value);
        self.notify_all();
    }

    /// Registers an observer, invoking it immediately with the current
    /// value. Returns the token to pass to [`Self::unsubscribe`].
    pub fn subscribe(&mut self, mut observer: impl FnMut(&T) + 'static) -> ObserverId {
        observer(&self.value);

        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push(Registration {
            id,
            observer: Box::new(observer),
        });
        id
    }

    /// Removes an observer. Silently a no-op for an unknown token.
    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|registration| registration.id != id);
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_all(&mut self) {
        tracing::trace!(observers = self.observers.len(), "store value replaced");
        for registration in &mut self.observers {
            (registration.observer)(&self.value);
        }
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
