//! The five click modifiers and the lifecycle they share.
//!
//! Each modifier owns a [`ModifierCore`]: its environment, the element it is
//! attached to, its [`EventOptions`], its output [`EventEmitter`] and, once
//! activated, the [`SubscriptionHandle`] of its single listener. The
//! modifier types only decide what to do with an event; registration,
//! the lifecycle state machine and teardown live in the core.
//!
//! ```rust,ignore
//! let mut modifier = SelfTarget::with_options(
//!     document.clone(),
//!     panel,
//!     EventOptions::new().with_prevent_default(true),
//! );
//! modifier.activate()?;
//! modifier.subscribe(|event| println!("clicked the panel itself: {event:?}"));
//! ```

mod any;
mod click_once;
mod click_outside;
mod kind;
mod prevent;
mod self_target;
mod stop;

pub use any::AnyEventModifier;
pub use click_once::ClickOnce;
pub use click_outside::ClickOutside;
pub use kind::{ModifierKind, ParseModifierError, CLICK};
pub use prevent::PreventDefault;
pub use self_target::SelfTarget;
pub use stop::StopPropagation;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::emitter::{EventEmitter, SubscriberId};
use crate::environment::{EventHandler, Environment, ListenError, ListenTarget, RawEvent};
use crate::options::{apply_guard, EventOptions};
use crate::subscription::SubscriptionHandle;

/// Lifecycle of a modifier instance. `Released` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Created,
    Activated,
    Released,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModifierError {
    #[error("modifier is already active")]
    AlreadyActive,
    #[error("modifier has been released")]
    Released,
    #[error(transparent)]
    Listen(#[from] ListenError),
}

/// State reachable from inside the registered listener.
pub(crate) struct ModifierShared<E> {
    state: Cell<LifecycleState>,
    options: Cell<EventOptions>,
    output: EventEmitter<E>,
}

impl<E: RawEvent> ModifierShared<E> {
    pub(crate) fn guard(&self, event: &E) {
        apply_guard(&self.options.get(), event);
    }

    pub(crate) fn emit(&self, event: &E) {
        self.output.emit(event);
    }
}

/// Which node the listener is registered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListenOn {
    Element,
    Document,
}

/// Registration and lifecycle shared by every modifier.
pub struct ModifierCore<Env: Environment> {
    kind: ModifierKind,
    env: Env,
    element: Env::Element,
    shared: Rc<ModifierShared<Env::Event>>,
    subscription: Option<SubscriptionHandle>,
}

impl<Env: Environment> ModifierCore<Env> {
    pub(crate) fn new(
        kind: ModifierKind,
        env: Env,
        element: Env::Element,
        options: EventOptions,
    ) -> Self {
        Self {
            kind,
            env,
            element,
            shared: Rc::new(ModifierShared {
                state: Cell::new(LifecycleState::Created),
                options: Cell::new(options),
                output: EventEmitter::new(),
            }),
            subscription: None,
        }
    }

    /// Which of the five behaviors this core backs.
    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn state(&self) -> LifecycleState {
        self.shared.state.get()
    }

    /// The element the modifier is attached to.
    pub fn element(&self) -> &Env::Element {
        &self.element
    }

    /// Stream of the events that passed this modifier's filter.
    pub fn output(&self) -> &EventEmitter<Env::Event> {
        &self.shared.output
    }

    /// Options the guard applies to the next delivered event.
    pub fn event_options(&self) -> EventOptions {
        self.shared.options.get()
    }

    /// Replaces the options; read afresh on every delivery.
    pub fn set_event_options(&self, options: EventOptions) {
        self.shared.options.set(options);
    }

    pub(crate) fn shared(&self) -> Rc<ModifierShared<Env::Event>> {
        Rc::clone(&self.shared)
    }

    /// Registers the single `click` listener of this instance.
    ///
    /// `on_event` only runs while the instance is active. A failed
    /// registration releases the instance for good.
    pub(crate) fn activate_with<H>(
        &mut self,
        on: ListenOn,
        on_event: H,
    ) -> Result<(), ModifierError>
    where
        H: Fn(&ModifierShared<Env::Event>, &Env::Event) + 'static,
    {
        match self.state() {
            LifecycleState::Created => {}
            LifecycleState::Activated => return Err(ModifierError::AlreadyActive),
            LifecycleState::Released => return Err(ModifierError::Released),
        }

        let shared = Rc::clone(&self.shared);
        let kind = self.kind;
        let handler: EventHandler<Env::Event> = Rc::new(move |event: &Env::Event| {
            if shared.state.get() != LifecycleState::Activated {
                log::trace!("click.{kind}: ignoring delivery to an inactive modifier");
                return;
            }
            on_event(&*shared, event);
        });

        let target = match on {
            ListenOn::Element => ListenTarget::Element(&self.element),
            ListenOn::Document => ListenTarget::Document,
        };
        match self.env.listen(target, CLICK, handler) {
            Ok(subscription) => {
                self.subscription = Some(subscription);
                self.shared.state.set(LifecycleState::Activated);
                log::debug!("click.{kind}: listening on {on:?}");
                Ok(())
            }
            Err(err) => {
                log::debug!("click.{kind}: activation failed: {err}");
                self.shared.state.set(LifecycleState::Released);
                self.shared.output.close();
                Err(err.into())
            }
        }
    }

    pub(crate) fn release(&mut self) {
        let previous = self.shared.state.replace(LifecycleState::Released);
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
        }
        self.shared.output.close();
        if previous != LifecycleState::Released {
            log::debug!("click.{}: released", self.kind);
        }
    }
}

impl<Env: Environment> Drop for ModifierCore<Env> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<Env: Environment> fmt::Debug for ModifierCore<Env> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierCore")
            .field("kind", &self.kind)
            .field("state", &self.state())
            .field("options", &self.event_options())
            .finish_non_exhaustive()
    }
}

/// Capability shared by the five modifiers.
///
/// Implementors provide access to their [`ModifierCore`] and decide how to
/// activate; everything else is derived.
pub trait EventModifier {
    type Env: Environment;

    /// Shared registration and lifecycle state.
    fn core(&self) -> &ModifierCore<Self::Env>;

    fn core_mut(&mut self) -> &mut ModifierCore<Self::Env>;

    /// Registers the listener. Must be called exactly once before any event
    /// can be handled.
    fn activate(&mut self) -> Result<(), ModifierError>;

    fn kind(&self) -> ModifierKind {
        self.core().kind()
    }

    fn state(&self) -> LifecycleState {
        self.core().state()
    }

    /// True between a successful `activate` and the first `release`.
    fn is_active(&self) -> bool {
        self.state() == LifecycleState::Activated
    }

    /// Removes the listener and closes the output. Safe to call repeatedly
    /// and in any state.
    fn release(&mut self) {
        self.core_mut().release();
    }

    /// Events that passed the filter, in delivery order.
    fn output(&self) -> &EventEmitter<<Self::Env as Environment>::Event> {
        self.core().output()
    }

    /// Shorthand for `self.output().subscribe(..)`.
    fn subscribe(
        &self,
        subscriber: impl Fn(&<Self::Env as Environment>::Event) + 'static,
    ) -> SubscriberId
    where
        Self: Sized,
    {
        self.output().subscribe(subscriber)
    }

    /// Options currently applied by the guard.
    fn event_options(&self) -> EventOptions {
        self.core().event_options()
    }

    /// Replaces the options; takes effect from the next delivered event.
    fn set_event_options(&self, options: EventOptions) {
        self.core().set_event_options(options);
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
