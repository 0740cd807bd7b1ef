//! In-memory document with DOM-style click dispatch.
//!
//! Nodes form a tree rooted at the document node. A dispatched event visits
//! its target first, then every ancestor up to and including the document,
//! invoking the listeners registered on each node in registration order. A
//! listener removed by an earlier listener of the same node is skipped.
//! Stopping propagation lets the remaining listeners of the current node run
//! and skips every node after it, as a browser does during bubbling.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use event_modifiers_core::{
    ElementRef, Environment, EventHandler, ListenError, ListenTarget, RawEvent,
    SubscriptionHandle,
};
use indexmap::IndexMap;

/// Identifies a node of a [`TestDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The document node every tree is rooted at.
    pub const DOCUMENT: NodeId = NodeId(0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct ListenerId(u64);

struct NodeData {
    tag: String,
    parent: Option<NodeId>,
}

struct Registration {
    node: NodeId,
    event_name: String,
    handler: EventHandler<TestEvent>,
}

#[derive(Default)]
struct DocumentInner {
    nodes: RefCell<Vec<NodeData>>,
    listeners: RefCell<IndexMap<ListenerId, Registration>>,
    pending_removals: RefCell<Vec<ListenerId>>,
    defer_removal: Cell<bool>,
    next_listener: Cell<u64>,
    listen_calls: Cell<usize>,
    fail_next_listen: RefCell<Option<String>>,
}

impl DocumentInner {
    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow().get(node.0).and_then(|data| data.parent)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent_of(id);
        }
        false
    }

    fn remove_listener(&self, id: ListenerId) {
        if self.defer_removal.get() {
            self.pending_removals.borrow_mut().push(id);
        } else {
            self.listeners.borrow_mut().shift_remove(&id);
        }
    }
}

/// Shared handle to an in-memory document. Clones refer to the same tree.
///
/// A fresh document holds the document node and a `body` element.
#[derive(Clone)]
pub struct TestDocument {
    inner: Rc<DocumentInner>,
}

impl TestDocument {
    pub fn new() -> Self {
        let inner = DocumentInner::default();
        inner.nodes.borrow_mut().extend([
            NodeData {
                tag: "#document".to_owned(),
                parent: None,
            },
            NodeData {
                tag: "body".to_owned(),
                parent: Some(NodeId::DOCUMENT),
            },
        ]);
        Self {
            inner: Rc::new(inner),
        }
    }

    pub fn document_node(&self) -> NodeId {
        NodeId::DOCUMENT
    }

    pub fn body(&self) -> TestElement {
        self.element(NodeId(1))
    }

    /// Appends a new element with `tag` under `parent`.
    pub fn create_element(&self, tag: &str, parent: &TestElement) -> TestElement {
        let mut nodes = self.inner.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(NodeData {
            tag: tag.to_owned(),
            parent: Some(parent.id),
        });
        drop(nodes);
        self.element(id)
    }

    pub fn tag_of(&self, node: NodeId) -> Option<String> {
        self.inner
            .nodes
            .borrow()
            .get(node.0)
            .map(|data| data.tag.clone())
    }

    /// Dispatches a `click` at `target` and returns the event once every
    /// listener on the propagation path has run.
    pub fn click(&self, target: NodeId) -> TestEvent {
        self.dispatch(target, "click")
    }

    pub fn dispatch(&self, target: NodeId, event_name: &str) -> TestEvent {
        let event = TestEvent::new(event_name, target);
        self.dispatch_event(&event);
        event
    }

    /// Delivers an already built event along its target's propagation path.
    pub fn dispatch_event(&self, event: &TestEvent) {
        let mut current = Some(event.target);
        while let Some(node) = current {
            let handlers: Vec<(ListenerId, EventHandler<TestEvent>)> = self
                .inner
                .listeners
                .borrow()
                .iter()
                .filter(|(_, registration)| {
                    registration.node == node && registration.event_name == event.event_name
                })
                .map(|(id, registration)| (*id, registration.handler.clone()))
                .collect();
            for (id, handler) in handlers {
                // An earlier listener on this node may have removed this one.
                if !self.inner.listeners.borrow().contains_key(&id) {
                    continue;
                }
                handler(event);
            }
            if event.propagation_stopped() {
                log::trace!("propagation of `{}` stopped at {node:?}", event.event_name);
                break;
            }
            current = self.inner.parent_of(node);
        }
    }

    /// Number of `listen` calls made against this document, including failed
    /// ones.
    pub fn listen_calls(&self) -> usize {
        self.inner.listen_calls.get()
    }

    /// Number of listeners currently receiving events.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn listeners_on(&self, node: NodeId) -> usize {
        self.inner
            .listeners
            .borrow()
            .values()
            .filter(|registration| registration.node == node)
            .count()
    }

    /// Makes the next `listen` call fail with `reason`.
    pub fn fail_next_listen(&self, reason: impl Into<String>) {
        *self.inner.fail_next_listen.borrow_mut() = Some(reason.into());
    }

    /// While enabled, released listeners keep receiving events until
    /// [`flush_removals`](Self::flush_removals), modelling a platform that
    /// still drains queued deliveries.
    pub fn defer_listener_removal(&self, defer: bool) {
        self.inner.defer_removal.set(defer);
        if !defer {
            self.flush_removals();
        }
    }

    pub fn flush_removals(&self) {
        let pending = std::mem::take(&mut *self.inner.pending_removals.borrow_mut());
        let mut listeners = self.inner.listeners.borrow_mut();
        for id in pending {
            listeners.shift_remove(&id);
        }
    }

    fn element(&self, id: NodeId) -> TestElement {
        TestElement {
            id,
            document: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for TestDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TestDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDocument")
            .field("nodes", &self.inner.nodes.borrow().len())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Environment for TestDocument {
    type Node = NodeId;
    type Element = TestElement;
    type Event = TestEvent;

    fn listen(
        &self,
        target: ListenTarget<'_, TestElement>,
        event_name: &str,
        handler: EventHandler<TestEvent>,
    ) -> Result<SubscriptionHandle, ListenError> {
        self.inner.listen_calls.set(self.inner.listen_calls.get() + 1);
        if let Some(reason) = self.inner.fail_next_listen.borrow_mut().take() {
            return Err(ListenError::new(event_name, reason));
        }

        let node = match target {
            ListenTarget::Element(element) => {
                if !Weak::ptr_eq(&element.document, &Rc::downgrade(&self.inner)) {
                    return Err(ListenError::new(
                        event_name,
                        "element belongs to another document",
                    ));
                }
                element.id
            }
            ListenTarget::Document => NodeId::DOCUMENT,
        };

        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().insert(
            id,
            Registration {
                node,
                event_name: event_name.to_owned(),
                handler,
            },
        );
        log::trace!("registered `{event_name}` listener {id:?} on {node:?}");

        let document = Rc::downgrade(&self.inner);
        Ok(SubscriptionHandle::new(move || {
            if let Some(document) = document.upgrade() {
                document.remove_listener(id);
            }
        }))
    }
}

/// Element of a [`TestDocument`].
#[derive(Clone)]
pub struct TestElement {
    id: NodeId,
    document: Weak<DocumentInner>,
}

impl TestElement {
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl PartialEq for TestElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Weak::ptr_eq(&self.document, &other.document)
    }
}

impl Eq for TestElement {}

impl fmt::Debug for TestElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TestElement").field(&self.id).finish()
    }
}

impl ElementRef for TestElement {
    type Node = NodeId;

    fn is_node(&self, node: &NodeId) -> bool {
        self.id == *node
    }

    fn contains_node(&self, node: &NodeId) -> bool {
        self.document
            .upgrade()
            .is_some_and(|document| document.contains(self.id, *node))
    }
}

/// Event delivered by a [`TestDocument`]. Counts the side effects applied
/// to it.
#[derive(Debug)]
pub struct TestEvent {
    event_name: String,
    target: NodeId,
    prevent_default_calls: Cell<usize>,
    stop_propagation_calls: Cell<usize>,
}

impl TestEvent {
    pub fn new(event_name: &str, target: NodeId) -> Self {
        Self {
            event_name: event_name.to_owned(),
            target,
            prevent_default_calls: Cell::new(0),
            stop_propagation_calls: Cell::new(0),
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn target_node(&self) -> NodeId {
        self.target
    }

    pub fn prevent_default_calls(&self) -> usize {
        self.prevent_default_calls.get()
    }

    pub fn stop_propagation_calls(&self) -> usize {
        self.stop_propagation_calls.get()
    }

    pub fn default_prevented(&self) -> bool {
        self.prevent_default_calls() > 0
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stop_propagation_calls() > 0
    }
}

impl RawEvent for TestEvent {
    type Target = NodeId;

    fn prevent_default(&self) {
        self.prevent_default_calls
            .set(self.prevent_default_calls.get() + 1);
    }

    fn stop_propagation(&self) {
        self.stop_propagation_calls
            .set(self.stop_propagation_calls.get() + 1);
    }

    fn target(&self) -> Option<NodeId> {
        Some(self.target)
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
