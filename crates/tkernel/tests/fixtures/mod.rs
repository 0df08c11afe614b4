use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tkernel::events::{Event, Listener};

pub fn theme_config() -> Value {
    json!({
        "theme": "aurora",
        "text_domain": "aurora",
        "config_version": "1.0",
        "feature_flags": { "dark_mode": true },
        "paths": { "assets": "dist/assets" }
    })
}

/// Captures every event it sees, in order.
#[derive(Debug, Clone, Default)]
pub struct Captured {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Captured {
    pub fn listener(&self) -> Listener {
        let events = Arc::clone(&self.events);
        Listener::infallible(move |event| events.lock().unwrap().push(event.clone()))
    }

    pub fn names(&self) -> Vec<String> {
        self.events.lock().unwrap().iter().map(|e| e.name().to_owned()).collect()
    }

    pub fn get(&self, index: usize) -> Event {
        self.events.lock().unwrap()[index].clone()
    }
}
