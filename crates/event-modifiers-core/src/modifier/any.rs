use crate::environment::Environment;
use crate::options::EventOptions;

use super::{
    ClickOnce, ClickOutside, EventModifier, ModifierCore, ModifierError, ModifierKind,
    PreventDefault, SelfTarget, StopPropagation,
};

/// Any of the five modifiers, selected at runtime by [`ModifierKind`].
#[derive(Debug)]
pub enum AnyEventModifier<Env: Environment> {
    Stop(StopPropagation<Env>),
    Prevent(PreventDefault<Env>),
    SelfTarget(SelfTarget<Env>),
    Once(ClickOnce<Env>),
    Outside(ClickOutside<Env>),
}

impl ModifierKind {
    /// Creates an inactive modifier of this kind for `element`.
    ///
    /// This is the attachment point for binding layers: a modifier name plus
    /// the instance's options is all they supply.
    pub fn bind<Env: Environment>(
        self,
        env: Env,
        element: Env::Element,
        options: EventOptions,
    ) -> AnyEventModifier<Env> {
        match self {
            ModifierKind::Stop => {
                AnyEventModifier::Stop(StopPropagation::with_options(env, element, options))
            }
            ModifierKind::Prevent => {
                AnyEventModifier::Prevent(PreventDefault::with_options(env, element, options))
            }
            ModifierKind::SelfTarget => {
                AnyEventModifier::SelfTarget(SelfTarget::with_options(env, element, options))
            }
            ModifierKind::Once => {
                AnyEventModifier::Once(ClickOnce::with_options(env, element, options))
            }
            ModifierKind::Outside => {
                AnyEventModifier::Outside(ClickOutside::with_options(env, element, options))
            }
        }
    }
}

impl<Env: Environment> EventModifier for AnyEventModifier<Env> {
    type Env = Env;

    fn core(&self) -> &ModifierCore<Env> {
        match self {
            AnyEventModifier::Stop(modifier) => modifier.core(),
            AnyEventModifier::Prevent(modifier) => modifier.core(),
            AnyEventModifier::SelfTarget(modifier) => modifier.core(),
            AnyEventModifier::Once(modifier) => modifier.core(),
            AnyEventModifier::Outside(modifier) => modifier.core(),
        }
    }

    fn core_mut(&mut self) -> &mut ModifierCore<Env> {
        match self {
            AnyEventModifier::Stop(modifier) => modifier.core_mut(),
            AnyEventModifier::Prevent(modifier) => modifier.core_mut(),
            AnyEventModifier::SelfTarget(modifier) => modifier.core_mut(),
            AnyEventModifier::Once(modifier) => modifier.core_mut(),
            AnyEventModifier::Outside(modifier) => modifier.core_mut(),
        }
    }

    fn activate(&mut self) -> Result<(), ModifierError> {
        match self {
            AnyEventModifier::Stop(modifier) => modifier.activate(),
            AnyEventModifier::Prevent(modifier) => modifier.activate(),
            AnyEventModifier::SelfTarget(modifier) => modifier.activate(),
            AnyEventModifier::Once(modifier) => modifier.activate(),
            AnyEventModifier::Outside(modifier) => modifier.activate(),
        }
    }
}
