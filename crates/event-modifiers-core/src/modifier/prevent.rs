use crate::environment::{Environment, RawEvent};
use crate::options::EventOptions;

use super::{EventModifier, ListenOn, ModifierCore, ModifierError, ModifierKind};

/// `click.prevent`: every click on the element has its default action
/// prevented, then is re-emitted.
#[derive(Debug)]
pub struct PreventDefault<Env: Environment> {
    core: ModifierCore<Env>,
}

impl<Env: Environment> PreventDefault<Env> {
    pub fn new(env: Env, element: Env::Element) -> Self {
        Self::with_options(env, element, EventOptions::default())
    }

    pub fn with_options(env: Env, element: Env::Element, options: EventOptions) -> Self {
        Self {
            core: ModifierCore::new(ModifierKind::Prevent, env, element, options),
        }
    }
}

impl<Env: Environment> EventModifier for PreventDefault<Env> {
    type Env = Env;

    fn core(&self) -> &ModifierCore<Env> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModifierCore<Env> {
        &mut self.core
    }

    fn activate(&mut self) -> Result<(), ModifierError> {
        self.core.activate_with(ListenOn::Element, |shared, event| {
            shared.guard(event);
            event.prevent_default();
            shared.emit(event);
        })
    }
}
