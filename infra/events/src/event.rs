use serde_json::{Map, Value};
use std::borrow::Cow;

/// Key/value payload carried by an [`Event`].
pub type Payload = Map<String, Value>;

/// A named event travelling through the listeners of one dispatch.
///
/// The name is fixed at construction; the payload is freely mutable by listeners.
/// Once [`Event::stop_propagation`] is called the flag stays set for the rest of
/// the event's life.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    name: Cow<'static, str>,
    data: Payload,
    propagation_stopped: bool,
}

impl Event {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, data: Payload) -> Self {
        Self { name: name.into(), data, propagation_stopped: false }
    }

    /// An event with an empty payload.
    #[must_use]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, Payload::new())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn data(&self) -> &Payload {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Payload {
        self.data
    }

    /// Stored value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Stored value for `key`, or `default` when the key is absent.
    ///
    /// A key explicitly holding `null` is returned as `null`.
    #[must_use]
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.data.get(key).cloned().unwrap_or_else(|| default.into())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.data.remove(key);
        self
    }

    /// Right-biased union: incoming values win on key collisions.
    pub fn merge(&mut self, data: Payload) -> &mut Self {
        self.data.extend(data);
        self
    }

    pub const fn stop_propagation(&mut self) -> &mut Self {
        self.propagation_stopped = true;
        self
    }

    #[must_use]
    pub const fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
