//! Synchronous in-process publish/subscribe broker.
//!
//! The bus is an explicit object owned by the application root and passed
//! by reference; there is no global dispatch node. Event names are
//! free-form strings agreed between publishers and subscribers. Delivery
//! is synchronous: every listener registered for a name runs, in
//! registration order, before `publish` returns. There is no queueing, no
//! backpressure, and no delivery guarantee beyond "currently registered
//! listeners, synchronously, once".

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// Token identifying a single listener registration.
///
/// Closures are not comparable, so this token is the identity handed back
/// by [`EventBus::subscribe`] and accepted by [`EventBus::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A published event as seen by listeners.
pub struct BusEvent<'a> {
    name: &'a str,
    payload: Option<&'a Value>,
    default_prevented: Cell<bool>,
}

impl BusEvent<'_> {
    /// The event name this was published under.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name
    }

    /// The payload, if the publisher attached one. Delivered unchanged to
    /// every listener.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        self.payload
    }

    /// Requests default-action suppression.
    ///
    /// No default action is defined at this layer; the flag is surfaced as
    /// the return value of [`EventBus::publish`] for callers that define one.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Whether any listener has requested default-action suppression.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl fmt::Debug for BusEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusEvent")
            .field("name", &self.name)
            .field("payload", &self.payload)
            .field("default_prevented", &self.default_prevented.get())
            .finish()
    }
}

type Listener = Box<dyn FnMut(&BusEvent<'_>)>;

struct Registration {
    id: SubscriptionId,
    listener: Listener,
}

/// Event broker mapping names to ordered listener lists.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<String, Vec<Registration>>,
    next_id: u64,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for events published under `event_name`.
    ///
    /// Multiple listeners may register for the same name and all are
    /// invoked; registering the same closure twice yields two invocations
    /// per event. Returns the token to pass to [`Self::unsubscribe`].
    pub fn subscribe(
        &mut self,
        event_name: impl Into<String>,
        listener: impl FnMut(&BusEvent<'_>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let event_name = event_name.into();
        tracing::debug!(event = %event_name, id = id.0, "listener subscribed");
        self.listeners.entry(event_name).or_default().push(Registration {
            id,
            listener: Box::new(listener),
        });
        id
    }

    /// Removes a registration. Silently a no-op if the token was never
    /// registered under `event_name` or was already removed; other
    /// listeners are unaffected.
    pub fn unsubscribe(&mut self, event_name: &str, id: SubscriptionId) {
        if let Some(registrations) = self.listeners.get_mut(event_name) {
            registrations.retain(|registration| registration.id != id);
            if registrations.is_empty() {
                self.listeners.remove(event_name);
            }
        }
    }

    /// Publishes an event with no payload.
    ///
    /// All listeners currently registered for `event_name` run in
    /// registration order before this returns. Publishing with zero
    /// listeners is fine. Returns `false` if any listener called
    /// [`BusEvent::prevent_default`].
    pub fn publish(&mut self, event_name: &str) -> bool {
        self.dispatch(event_name, None)
    }

    /// Publishes an event carrying a payload of arbitrary shape.
    pub fn publish_with(&mut self, event_name: &str, payload: Value) -> bool {
        self.dispatch(event_name, Some(&payload))
    }

    /// Number of listeners currently registered for `event_name`.
    #[must_use]
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.listeners.get(event_name).map_or(0, Vec::len)
    }

    fn dispatch(&mut self, event_name: &str, payload: Option<&Value>) -> bool {
        let Some(registrations) = self.listeners.get_mut(event_name) else {
            tracing::trace!(event = %event_name, "published with no listeners");
            return true;
        };

        tracing::debug!(
            event = %event_name,
            listeners = registrations.len(),
            "publishing"
        );
        let event = BusEvent {
            name: event_name,
            payload,
            default_prevented: Cell::new(false),
        };
        for registration in registrations.iter_mut() {
            (registration.listener)(&event);
        }
        !event.default_prevented.get()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut events: Vec<_> = self
            .listeners
            .iter()
            .map(|(name, registrations)| (name.as_str(), registrations.len()))
            .collect();
        events.sort_unstable();
        f.debug_struct("EventBus").field("listeners", &events).finish()
    }
}
