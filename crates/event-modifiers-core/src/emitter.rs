use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// Identifies one subscriber of an [`EventEmitter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber<E> = (SubscriberId, Rc<dyn Fn(&E)>);

/// Output stream of a modifier.
///
/// Every subscriber receives every emitted event, subscribers in the order
/// they subscribed, events in the order they were emitted. A closed emitter
/// drops all subscribers and ignores further emissions.
pub struct EventEmitter<E> {
    subscribers: RefCell<SmallVec<[Subscriber<E>; 2]>>,
    next_id: Cell<u64>,
    closed: Cell<bool>,
}

impl<E> EventEmitter<E> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(SmallVec::new()),
            next_id: Cell::new(0),
            closed: Cell::new(false),
        }
    }

    /// Adds a subscriber. On a closed emitter the subscriber is dropped
    /// immediately.
    pub fn subscribe(&self, subscriber: impl Fn(&E) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        if !self.closed.get() {
            self.subscribers
                .borrow_mut()
                .push((id, Rc::new(subscriber)));
        }
        id
    }

    /// Removes a subscriber. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn emit(&self, event: &E) {
        if self.closed.get() {
            return;
        }
        // Snapshot so subscribers can (un)subscribe while being notified.
        let snapshot: SmallVec<[Rc<dyn Fn(&E)>; 2]> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();
        for subscriber in snapshot {
            if self.closed.get() {
                break;
            }
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn close(&self) {
        self.closed.set(true);
        // Drop outside the borrow in case a subscriber's destructor touches us.
        let dropped = std::mem::take(&mut *self.subscribers.borrow_mut());
        drop(dropped);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscribers", &self.subscriber_count())
            .field("closed", &self.closed.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/emitter_tests.rs"]
mod tests;
