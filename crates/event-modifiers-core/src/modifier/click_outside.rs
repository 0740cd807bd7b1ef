use crate::environment::{ElementRef, Environment, RawEvent};
use crate::options::EventOptions;

use super::{EventModifier, ListenOn, ModifierCore, ModifierError, ModifierKind};

/// `click.outside`: re-emits clicks anywhere in the document that land
/// outside the element's subtree.
///
/// The listener is registered on the document. A click without a target
/// counts as outside.
#[derive(Debug)]
pub struct ClickOutside<Env: Environment> {
    core: ModifierCore<Env>,
}

impl<Env: Environment> ClickOutside<Env> {
    pub fn new(env: Env, element: Env::Element) -> Self {
        Self::with_options(env, element, EventOptions::default())
    }

    pub fn with_options(env: Env, element: Env::Element, options: EventOptions) -> Self {
        Self {
            core: ModifierCore::new(ModifierKind::Outside, env, element, options),
        }
    }
}

impl<Env: Environment> EventModifier for ClickOutside<Env> {
    type Env = Env;

    fn core(&self) -> &ModifierCore<Env> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModifierCore<Env> {
        &mut self.core
    }

    fn activate(&mut self) -> Result<(), ModifierError> {
        let element = self.core.element().clone();
        self.core.activate_with(ListenOn::Document, move |shared, event| {
            shared.guard(event);
            let inside = event
                .target()
                .is_some_and(|target| element.contains_node(&target));
            if inside {
                log::trace!("click.outside: click landed inside the element, dropped");
            } else {
                shared.emit(event);
            }
        })
    }
}
