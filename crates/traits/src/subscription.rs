//! Disposable handles for registered event listeners.

use std::fmt;

/// A registered event listener.
///
/// Dropping the handle (or calling [`Subscription::dispose`]) detaches the
/// listener. Listeners meant to live as long as the page are kept alive with
/// [`Subscription::forget`].
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the teardown for a listener.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription with nothing to detach.
    pub fn noop() -> Self {
        Self { detach: None }
    }

    /// Detaches the listener now.
    pub fn dispose(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }

    /// Leaks the handle so the listener stays attached for the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_dispose_runs_teardown_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));
        assert!(sub.is_active());
        sub.dispose();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_detaches() {
        let count = Rc::new(Cell::new(0));
        {
            let c = count.clone();
            let _sub = Subscription::new(move || c.set(c.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_forget_keeps_listener() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        Subscription::new(move || c.set(c.get() + 1)).forget();
        assert_eq!(count.get(), 0);
    }
}
