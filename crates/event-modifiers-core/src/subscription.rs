use std::cell::RefCell;
use std::fmt;

/// One active listener registration.
///
/// The handle owns the closure that removes the listener from its
/// environment. [`release`](Self::release) runs it at most once; dropping an
/// unreleased handle releases it as well.
pub struct SubscriptionHandle {
    release: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl SubscriptionHandle {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: RefCell::new(Some(Box::new(release))),
        }
    }

    /// A handle with nothing to deregister.
    pub fn noop() -> Self {
        Self {
            release: RefCell::new(None),
        }
    }

    /// Removes the listener. Calling this again does nothing.
    pub fn release(&self) {
        // Take first so a release callback that re-enters sees an empty slot.
        let release = self.release.borrow_mut().take();
        if let Some(release) = release {
            release();
        }
    }

    pub fn is_released(&self) -> bool {
        self.release.borrow().is_none()
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(release) = self.release.get_mut().take() {
            release();
        }
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("released", &self.is_released())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/subscription_tests.rs"]
mod tests;
