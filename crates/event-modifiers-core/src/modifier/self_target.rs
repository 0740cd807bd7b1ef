use crate::environment::{ElementRef, Environment, RawEvent};
use crate::options::EventOptions;

use super::{EventModifier, ListenOn, ModifierCore, ModifierError, ModifierKind};

/// `click.self`: re-emits a click only when the element itself is the
/// target, not one of its descendants.
///
/// The options are applied to every click that reaches the element,
/// including the ones bubbling up from children that are then dropped.
#[derive(Debug)]
pub struct SelfTarget<Env: Environment> {
    core: ModifierCore<Env>,
}

impl<Env: Environment> SelfTarget<Env> {
    pub fn new(env: Env, element: Env::Element) -> Self {
        Self::with_options(env, element, EventOptions::default())
    }

    pub fn with_options(env: Env, element: Env::Element, options: EventOptions) -> Self {
        Self {
            core: ModifierCore::new(ModifierKind::SelfTarget, env, element, options),
        }
    }
}

impl<Env: Environment> EventModifier for SelfTarget<Env> {
    type Env = Env;

    fn core(&self) -> &ModifierCore<Env> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModifierCore<Env> {
        &mut self.core
    }

    fn activate(&mut self) -> Result<(), ModifierError> {
        let element = self.core.element().clone();
        self.core.activate_with(ListenOn::Element, move |shared, event| {
            shared.guard(event);
            if event.target().is_some_and(|target| element.is_node(&target)) {
                shared.emit(event);
            } else {
                log::trace!("click.self: target is not the element, dropped");
            }
        })
    }
}
