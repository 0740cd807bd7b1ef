use crate::environment::Environment;
use crate::once::once;
use crate::options::EventOptions;

use super::{EventModifier, ListenOn, ModifierCore, ModifierError, ModifierKind};

/// `click.once`: only the first click on the element is re-emitted.
///
/// The listener stays registered until release; later clicks are dropped
/// before the options are applied.
#[derive(Debug)]
pub struct ClickOnce<Env: Environment> {
    core: ModifierCore<Env>,
}

impl<Env: Environment> ClickOnce<Env> {
    pub fn new(env: Env, element: Env::Element) -> Self {
        Self::with_options(env, element, EventOptions::default())
    }

    pub fn with_options(env: Env, element: Env::Element, options: EventOptions) -> Self {
        Self {
            core: ModifierCore::new(ModifierKind::Once, env, element, options),
        }
    }
}

impl<Env: Environment> EventModifier for ClickOnce<Env> {
    type Env = Env;

    fn core(&self) -> &ModifierCore<Env> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModifierCore<Env> {
        &mut self.core
    }

    fn activate(&mut self) -> Result<(), ModifierError> {
        let shared = self.core.shared();
        let first = once(move |event: &Env::Event| {
            shared.guard(event);
            shared.emit(event);
        });
        self.core.activate_with(ListenOn::Element, move |_, event| {
            if first.has_run() {
                log::trace!("click.once: already fired, dropped");
            }
            first.call(event);
        })
    }
}
