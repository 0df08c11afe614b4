//! # Events
//!
//! A synchronous, priority-ordered event dispatcher for kernel lifecycle hooks.
//!
//! ## Overview
//!
//! Listeners subscribe to an event *name* (dotted tokens by convention, e.g.
//! `kernel.booted`). Dispatching creates an [`Event`] carrying a JSON payload,
//! hands it to every listener in priority order on the calling thread, and
//! returns it so the caller can read what listeners wrote.
//!
//! ## Features
//!
//! * **Priorities**: higher runs first, ties keep registration order.
//! * **One-shot listeners**: [`EventDispatcher::once`] listeners fire at most once.
//! * **Propagation control**: a listener can stop the remaining chain.
//! * **Identity removal**: [`EventDispatcher::off`] matches the [`Listener`] handle.
//! * **Shared registry**: `FxHashMap` behind a `parking_lot::RwLock`, never held
//!   while a listener runs.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tkernel_events::{EventDispatcher, EventError, Listener, Payload};
//!
//! # fn main() -> Result<(), EventError> {
//! let dispatcher = EventDispatcher::new();
//!
//! dispatcher.on_with_priority(
//!     "theme.assets",
//!     Listener::infallible(|event| {
//!         let count = event.get_or("count", 0).as_i64().unwrap_or_default();
//!         event.set("count", count + 1);
//!     }),
//!     100,
//! );
//!
//! let mut data = Payload::new();
//! data.insert("count".into(), json!(5));
//!
//! let event = dispatcher.dispatch("theme.assets", data)?;
//! assert_eq!(event.get("count"), Some(&json!(6)));
//! # Ok(())
//! # }
//! ```

mod dispatcher;
mod error;
mod event;
mod listener;

pub use dispatcher::{DEFAULT_PRIORITY, EventDispatcher};
pub use error::{EventError, EventErrorExt, ListenerError};
pub use event::{Event, Payload};
pub use listener::Listener;
