use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tkernel_events::{Listener, Payload};

/// Collects labels in invocation order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that records `label` each time it runs.
    pub fn listener(&self, label: impl Into<String>) -> Listener {
        let calls = Arc::clone(&self.calls);
        let label = label.into();
        Listener::without_event(move || calls.lock().push(label.clone()))
    }

    /// A listener that records `label` and then stops propagation.
    pub fn stopper(&self, label: impl Into<String>) -> Listener {
        let calls = Arc::clone(&self.calls);
        let label = label.into();
        Listener::infallible(move |event| {
            calls.lock().push(label.clone());
            event.stop_propagation();
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }
}

pub fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("payload must be an object, got {other}"),
    }
}
