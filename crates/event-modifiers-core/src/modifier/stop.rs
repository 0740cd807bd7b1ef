use crate::environment::{Environment, RawEvent};
use crate::options::EventOptions;

use super::{EventModifier, ListenOn, ModifierCore, ModifierError, ModifierKind};

/// `click.stop`: every click on the element stops propagating, then is
/// re-emitted.
///
/// Propagation is stopped regardless of [`EventOptions::stop_propagation`].
#[derive(Debug)]
pub struct StopPropagation<Env: Environment> {
    core: ModifierCore<Env>,
}

impl<Env: Environment> StopPropagation<Env> {
    pub fn new(env: Env, element: Env::Element) -> Self {
        Self::with_options(env, element, EventOptions::default())
    }

    pub fn with_options(env: Env, element: Env::Element, options: EventOptions) -> Self {
        Self {
            core: ModifierCore::new(ModifierKind::Stop, env, element, options),
        }
    }
}

impl<Env: Environment> EventModifier for StopPropagation<Env> {
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
            event.stop_propagation();
            shared.emit(event);
        })
    }
}
