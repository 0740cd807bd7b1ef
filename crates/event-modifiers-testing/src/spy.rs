use std::cell::RefCell;
use std::rc::Rc;

use event_modifiers_core::EventModifier;

use crate::document::{NodeId, TestDocument, TestEvent};

/// Records the target of every event a modifier emits.
#[derive(Clone, Debug)]
pub struct EmissionLog {
    targets: Rc<RefCell<Vec<NodeId>>>,
}

impl EmissionLog {
    pub fn attach<M>(modifier: &M) -> Self
    where
        M: EventModifier<Env = TestDocument>,
    {
        let targets = Rc::new(RefCell::new(Vec::new()));
        modifier.output().subscribe({
            let targets = targets.clone();
            move |event: &TestEvent| targets.borrow_mut().push(event.target_node())
        });
        Self { targets }
    }

    pub fn count(&self) -> usize {
        self.targets.borrow().len()
    }

    pub fn targets(&self) -> Vec<NodeId> {
        self.targets.borrow().clone()
    }

    /// Forgets everything recorded so far; the log stays subscribed.
    pub fn clear(&self) {
        self.targets.borrow_mut().clear();
    }
}
