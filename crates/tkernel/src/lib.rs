//! Facade crate for the theme kernel.
//! Boots a theme from a raw config: validates it against the compatibility policy,
//! builds the [`ThemeContext`] and announces the boot through the event dispatcher.
//! Keep this crate thin: it composes the config and events crates.
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use tkernel::events::{EventDispatcher, Listener};
//! use tkernel::{EVENT_BOOTED, Kernel};
//!
//! let events = EventDispatcher::new();
//! events.on(EVENT_BOOTED, Listener::infallible(|event| {
//!     assert_eq!(event.get("kernel_version"), Some(&json!("0.1.0")));
//! }));
//!
//! let kernel = Kernel::builder()
//!     .environment("development")
//!     .dispatcher(events)
//!     .boot(&json!({ "theme": "aurora", "text_domain": "aurora", "config_version": "1.0" }))
//!     .unwrap();
//!
//! assert_eq!(kernel.context().theme(), "aurora");
//! ```

mod context;
mod environment;
mod error;
mod kernel;

pub use context::ThemeContext;
pub use environment::{ENV_VAR, Environment};
pub use error::{KernelError, KernelErrorExt};
pub use kernel::{EVENT_BOOTED, EVENT_CONFIG_VALIDATED, KERNEL_VERSION, Kernel, KernelBuilder};

pub use tkernel_config as config;
pub use tkernel_domain as domain;
pub use tkernel_events as events;
