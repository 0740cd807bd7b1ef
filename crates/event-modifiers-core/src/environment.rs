//! The capabilities a host environment lends to event modifiers.
//!
//! Modifiers never touch the platform directly. Everything they need, from
//! registering a listener to asking whether an element contains the clicked
//! node, goes through the traits in this module so the same modifier code
//! runs against a browser DOM, a native widget tree or an in-memory test
//! document.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::subscription::SubscriptionHandle;

/// Callback invoked for every raw event delivered to a listener.
pub type EventHandler<E> = Rc<dyn Fn(&E)>;

/// Minimal shape of a platform event.
pub trait RawEvent {
    /// Node type the event reports as its target.
    type Target;

    fn prevent_default(&self);

    fn stop_propagation(&self);

    /// Node the event was originally dispatched to, if any.
    fn target(&self) -> Option<Self::Target>;
}

/// Reference to the element a modifier is attached to.
pub trait ElementRef: Clone {
    type Node;

    /// Returns true if `node` is this very element.
    fn is_node(&self, node: &Self::Node) -> bool;

    /// Returns true if `node` is this element or lies anywhere in its subtree.
    fn contains_node(&self, node: &Self::Node) -> bool;
}

/// Where a listener is registered.
pub enum ListenTarget<'a, El> {
    Element(&'a El),
    /// The top-level document, which observes clicks anywhere.
    Document,
}

impl<El> Clone for ListenTarget<'_, El> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<El> Copy for ListenTarget<'_, El> {}

impl<El> fmt::Debug for ListenTarget<'_, El> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenTarget::Element(_) => f.write_str("Element"),
            ListenTarget::Document => f.write_str("Document"),
        }
    }
}

/// Returned by [`Environment::listen`] when the listener could not be
/// attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to attach `{event_name}` listener: {reason}")]
pub struct ListenError {
    pub event_name: String,
    pub reason: String,
}

impl ListenError {
    pub fn new(event_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            reason: reason.into(),
        }
    }
}

/// Listener attachment capability of a host environment.
pub trait Environment {
    type Node;
    type Element: ElementRef<Node = Self::Node> + 'static;
    type Event: RawEvent<Target = Self::Node> + 'static;

    /// Registers `handler` for `event_name` on `target`.
    ///
    /// The returned handle removes the listener when released or dropped.
    fn listen(
        &self,
        target: ListenTarget<'_, Self::Element>,
        event_name: &str,
        handler: EventHandler<Self::Event>,
    ) -> Result<SubscriptionHandle, ListenError>;
}

impl<T: Environment + ?Sized> Environment for Rc<T> {
    type Node = T::Node;
    type Element = T::Element;
    type Event = T::Event;

    fn listen(
        &self,
        target: ListenTarget<'_, Self::Element>,
        event_name: &str,
        handler: EventHandler<Self::Event>,
    ) -> Result<SubscriptionHandle, ListenError> {
        (**self).listen(target, event_name, handler)
    }
}
