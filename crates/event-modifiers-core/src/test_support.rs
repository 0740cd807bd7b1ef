//! Flat fake environment for unit tests: nodes are plain integers and a
//! node's ancestors are listed explicitly on the element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::environment::{
    ElementRef, Environment, EventHandler, ListenError, ListenTarget, RawEvent,
};
use crate::subscription::SubscriptionHandle;

pub(crate) const DOCUMENT: u32 = 0;

#[derive(Default)]
pub(crate) struct FakeEvent {
    pub target: Option<u32>,
    pub prevent_default_calls: Cell<u32>,
    pub stop_propagation_calls: Cell<u32>,
}

impl FakeEvent {
    pub fn targeting(node: u32) -> Self {
        Self {
            target: Some(node),
            ..Self::default()
        }
    }
}

impl RawEvent for FakeEvent {
    type Target = u32;

    fn prevent_default(&self) {
        self.prevent_default_calls.set(self.prevent_default_calls.get() + 1);
    }

    fn stop_propagation(&self) {
        self.stop_propagation_calls
            .set(self.stop_propagation_calls.get() + 1);
    }

    fn target(&self) -> Option<u32> {
        self.target
    }
}

#[derive(Clone, Debug)]
pub(crate) struct FakeElement {
    pub id: u32,
    pub descendants: Vec<u32>,
}

impl ElementRef for FakeElement {
    type Node = u32;

    fn is_node(&self, node: &u32) -> bool {
        self.id == *node
    }

    fn contains_node(&self, node: &u32) -> bool {
        self.id == *node || self.descendants.contains(node)
    }
}

#[derive(Default)]
pub(crate) struct FakeEnvState {
    pub handlers: RefCell<Vec<(u32, EventHandler<FakeEvent>)>>,
    pub listen_calls: Cell<u32>,
    pub releases: Cell<u32>,
    pub fail_with: RefCell<Option<String>>,
}

/// Records registrations; [`FakeEnv::deliver`] calls every handler that is
/// still registered, regardless of target.
#[derive(Clone, Default)]
pub(crate) struct FakeEnv {
    pub state: Rc<FakeEnvState>,
}

impl std::fmt::Debug for FakeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeEnv").finish_non_exhaustive()
    }
}

impl FakeEnv {
    pub fn deliver(&self, event: &FakeEvent) {
        let handlers: Vec<_> = self
            .state
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    pub fn registered_on(&self) -> Vec<u32> {
        self.state
            .handlers
            .borrow()
            .iter()
            .map(|(node, _)| *node)
            .collect()
    }
}

impl Environment for FakeEnv {
    type Node = u32;
    type Element = FakeElement;
    type Event = FakeEvent;

    fn listen(
        &self,
        target: ListenTarget<'_, FakeElement>,
        event_name: &str,
        handler: EventHandler<FakeEvent>,
    ) -> Result<SubscriptionHandle, ListenError> {
        self.state.listen_calls.set(self.state.listen_calls.get() + 1);
        if let Some(reason) = self.state.fail_with.borrow_mut().take() {
            return Err(ListenError::new(event_name, reason));
        }
        let node = match target {
            ListenTarget::Element(element) => element.id,
            ListenTarget::Document => DOCUMENT,
        };
        self.state.handlers.borrow_mut().push((node, handler.clone()));
        let state = Rc::clone(&self.state);
        Ok(SubscriptionHandle::new(move || {
            state.releases.set(state.releases.get() + 1);
            state
                .handlers
                .borrow_mut()
                .retain(|(_, existing)| !Rc::ptr_eq(existing, &handler));
        }))
    }
}
