use std::borrow::Cow;

/// Errors surfaced by [`crate::EventDispatcher::dispatch`].
///
/// Registration never fails; the only failure is a listener refusing to complete.
#[tkernel_derive::tkernel_error]
pub enum EventError {
    /// A listener failed and the remaining listeners of the dispatch were skipped.
    #[error("Listener for '{event}' failed{}: {source}", format_context(.context))]
    Listener { event: Cow<'static, str>, source: ListenerError, context: Option<Cow<'static, str>> },
}

/// Failure reported by a listener callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ListenerError {
    message: Cow<'static, str>,
}

impl ListenerError {
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&'static str> for ListenerError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ListenerError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
