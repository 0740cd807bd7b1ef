//! Declarative click event modifiers.
//!
//! Five small behaviors layered on a raw listener capability:
//! [`StopPropagation`], [`PreventDefault`], [`SelfTarget`], [`ClickOnce`] and
//! [`ClickOutside`]. Each registers exactly one listener through an
//! [`Environment`], applies its [`EventOptions`] and re-emits the events it
//! lets through on its own [`EventEmitter`].

pub mod emitter;
pub mod environment;
pub mod modifier;
pub mod once;
pub mod options;
pub mod subscription;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items
pub use emitter::{EventEmitter, SubscriberId};
pub use environment::{ElementRef, Environment, EventHandler, ListenError, ListenTarget, RawEvent};
pub use modifier::*;
pub use once::{once, Once};
pub use options::{apply_guard, EventOptions};
pub use subscription::SubscriptionHandle;

pub mod prelude {
    pub use crate::environment::{ElementRef, Environment, RawEvent};
    pub use crate::modifier::{
        AnyEventModifier, ClickOnce, ClickOutside, EventModifier, LifecycleState, ModifierKind,
        PreventDefault, SelfTarget, StopPropagation,
    };
    pub use crate::options::EventOptions;
}
