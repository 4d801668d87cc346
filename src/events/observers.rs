//! Subscriber registry.
//!
//! Observers are plain callbacks. The registry is generic over the subject
//! so it can hand each callback a shared reference to whatever emitted the
//! event; the game passes itself, letting subscribers re-query state.

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriberId(pub u32);

impl SubscriberId {
    /// Create a new subscriber ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscriber({})", self.0)
    }
}

/// Callback invoked after each successful mutation.
pub type Observer<S> = Box<dyn FnMut(&S, GameEvent)>;

/// Ordered list of subscribers.
///
/// Callbacks fire in subscription order.
pub struct ObserverRegistry<S> {
    observers: Vec<(SubscriberId, Observer<S>)>,
    next_id: u32,
}

impl<S> Default for ObserverRegistry<S> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<S> std::fmt::Debug for ObserverRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.ids())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<S> ObserverRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callback and return its handle.
    pub fn subscribe(&mut self, observer: impl FnMut(&S, GameEvent) + 'static) -> SubscriberId {
        let id = SubscriberId::new(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Invoke every callback with the subject and event.
    pub fn notify(&mut self, subject: &S, event: GameEvent) {
        for (id, observer) in &mut self.observers {
            log::trace!("{} <- {}", id, event);
            observer(subject, event);
        }
    }

    /// Current subscriber handles, in subscription order.
    #[must_use]
    pub fn ids(&self) -> Vec<SubscriberId> {
        self.observers.iter().map(|(id, _)| *id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
