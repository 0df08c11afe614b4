use crate::error::EventError;
use crate::event::{Event, Payload};
use crate::listener::Listener;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Priority used by [`EventDispatcher::on`] and [`EventDispatcher::once`].
pub const DEFAULT_PRIORITY: i32 = 10;

#[derive(Debug, Clone)]
struct Entry {
    id: u64,
    listener: Listener,
    priority: i32,
    once: bool,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    // Each bucket is kept sorted by descending priority, ties in registration order.
    events: FxHashMap<String, Vec<Entry>>,
}

impl Registry {
    fn insert(&mut self, name: String, listener: Listener, priority: i32, once: bool) {
        let id = self.next_id;
        self.next_id += 1;

        let entries = self.events.entry(name).or_default();
        let position = entries.partition_point(|e| e.priority >= priority);
        entries.insert(position, Entry { id, listener, priority, once });
    }

    fn remove_where(&mut self, name: &str, matches: impl Fn(&Entry) -> bool) -> bool {
        let Some(entries) = self.events.get_mut(name) else {
            return false;
        };
        let Some(position) = entries.iter().position(matches) else {
            return false;
        };

        entries.remove(position);
        if entries.is_empty() {
            self.events.remove(name);
        }
        true
    }
}

/// Synchronous, priority-ordered event dispatcher.
///
/// Listeners for an event name run highest priority first; equal priorities run in
/// registration order. The handle is cheap to clone and every clone shares one
/// registry, so hosts construct one dispatcher and pass it where it is needed.
///
/// The registry lock is released before any listener runs: listeners may register,
/// remove or dispatch on the same dispatcher.
#[derive(Debug, Clone, Default)]
pub struct EventDispatcher {
    registry: Arc<RwLock<Registry>>,
}

impl EventDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener with [`DEFAULT_PRIORITY`].
    pub fn on(&self, event: impl Into<String>, listener: Listener) -> &Self {
        self.on_with_priority(event, listener, DEFAULT_PRIORITY)
    }

    /// Registers a listener; higher priorities run first.
    pub fn on_with_priority(
        &self,
        event: impl Into<String>,
        listener: Listener,
        priority: i32,
    ) -> &Self {
        self.register(event.into(), listener, priority, false)
    }

    /// Registers a listener that is removed as soon as it is invoked.
    pub fn once(&self, event: impl Into<String>, listener: Listener) -> &Self {
        self.once_with_priority(event, listener, DEFAULT_PRIORITY)
    }

    pub fn once_with_priority(
        &self,
        event: impl Into<String>,
        listener: Listener,
        priority: i32,
    ) -> &Self {
        self.register(event.into(), listener, priority, true)
    }

    /// Removes the first registration of `listener` for `event`.
    ///
    /// Returns `false` when no registration matched.
    pub fn off(&self, event: &str, listener: &Listener) -> bool {
        let removed = self.registry.write().remove_where(event, |e| e.listener.same_as(listener));
        trace!(event, removed, "Listener removal requested");
        removed
    }

    /// Clears the listeners of one event, or of every event when `event` is `None`.
    pub fn remove_all_listeners(&self, event: Option<&str>) {
        let mut registry = self.registry.write();
        match event {
            Some(name) => {
                registry.events.remove(name);
            },
            None => registry.events.clear(),
        }
        drop(registry);
        trace!(event, "Listeners cleared");
    }

    #[must_use]
    pub fn has_listeners(&self, event: &str) -> bool {
        self.registry.read().events.get(event).is_some_and(|entries| !entries.is_empty())
    }

    /// Listeners of `event` in dispatch order.
    #[must_use]
    pub fn listeners(&self, event: &str) -> Vec<Listener> {
        self.registry
            .read()
            .events
            .get(event)
            .map(|entries| entries.iter().map(|e| e.listener.clone()).collect())
            .unwrap_or_default()
    }

    /// Number of listeners for one event, or across all events when `event` is `None`.
    #[must_use]
    pub fn count_listeners(&self, event: Option<&str>) -> usize {
        let registry = self.registry.read();
        match event {
            Some(name) => registry.events.get(name).map_or(0, Vec::len),
            None => registry.events.values().map(Vec::len).sum(),
        }
    }

    /// Dispatches an event with an empty payload.
    ///
    /// # Errors
    /// See [`EventDispatcher::dispatch`].
    pub fn dispatch_empty(&self, event: impl Into<Cow<'static, str>>) -> Result<Event, EventError> {
        self.dispatch(event, Payload::new())
    }

    /// Runs the listeners registered for `event` and returns the resulting event.
    ///
    /// The listener list is captured when the dispatch starts; listeners registered
    /// while it runs take effect from the next dispatch. A one-shot listener is
    /// deregistered right before it is invoked, so it never runs twice even if it
    /// fails or a nested dispatch reaches it first. Iteration ends as soon as a
    /// listener stops propagation.
    ///
    /// Dispatching an event nobody listens to returns the untouched event.
    ///
    /// # Errors
    /// Returns [`EventError::Listener`] when a listener fails. Listeners after the
    /// failing one are not invoked.
    pub fn dispatch(
        &self,
        event: impl Into<Cow<'static, str>>,
        data: Payload,
    ) -> Result<Event, EventError> {
        let mut event = Event::new(event, data);

        let snapshot = self.registry.read().events.get(event.name()).cloned().unwrap_or_default();
        trace!(event = event.name(), listeners = snapshot.len(), "Dispatching event");

        for entry in snapshot {
            if entry.once && !self.take(event.name(), entry.id) {
                continue;
            }

            if let Err(source) = entry.listener.call(&mut event) {
                warn!(
                    event = event.name(),
                    priority = entry.priority,
                    error = %source,
                    "Listener failed; remaining listeners skipped"
                );
                return Err(EventError::Listener {
                    event: Cow::Owned(event.name().to_owned()),
                    source,
                    context: None,
                });
            }

            if event.is_propagation_stopped() {
                debug!(event = event.name(), priority = entry.priority, "Propagation stopped");
                break;
            }
        }

        Ok(event)
    }

    fn register(&self, event: String, listener: Listener, priority: i32, once: bool) -> &Self {
        trace!(event = %event, priority, once, "Registering listener");
        self.registry.write().insert(event, listener, priority, once);
        self
    }

    fn take(&self, event: &str, id: u64) -> bool {
        self.registry.write().remove_where(event, |e| e.id == id)
    }
}
