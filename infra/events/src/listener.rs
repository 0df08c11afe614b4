use crate::error::ListenerError;
use crate::event::Event;
use std::fmt;
use std::sync::Arc;

type Callback = dyn Fn(&mut Event) -> Result<(), ListenerError> + Send + Sync;

/// Shared handle to a listener callback.
///
/// Cloning is cheap and clones compare equal: equality is identity of the
/// underlying callback, which is what [`crate::EventDispatcher::off`] matches on.
/// Two handles built from identical closures are distinct listeners.
#[derive(Clone)]
pub struct Listener {
    callback: Arc<Callback>,
}

impl Listener {
    /// Wraps a fallible callback. Returning an error aborts the dispatch.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut Event) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self { callback: Arc::new(callback) }
    }

    /// Wraps a callback that cannot fail.
    pub fn infallible<F>(callback: F) -> Self
    where
        F: Fn(&mut Event) + Send + Sync + 'static,
    {
        Self::new(move |event| {
            callback(event);
            Ok(())
        })
    }

    /// Adapts a callback that does not look at the event.
    pub fn without_event<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::new(move |_| {
            callback();
            Ok(())
        })
    }

    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.callback), Arc::as_ptr(&other.callback))
    }

    pub(crate) fn call(&self, event: &mut Event) -> Result<(), ListenerError> {
        (self.callback)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener").field(&Arc::as_ptr(&self.callback).cast::<()>()).finish()
    }
}
