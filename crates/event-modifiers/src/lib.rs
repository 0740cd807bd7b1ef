#![deny(missing_docs)]

//! Declarative click modifiers behind a single dependency.
//!
//! Re-exports the modifier core and, with the `web` feature, the browser
//! environment.

/// Re-export the core crate so applications can depend on a single crate.
pub use event_modifiers_core::*;

/// Browser DOM environment.
#[cfg(feature = "web")]
pub use event_modifiers_platform_web::{WebElement, WebEnvironment, WebEvent};

/// Creates and activates the modifier named by a binding attribute such as
/// `click.outside`.
///
/// This is what a template binding layer calls when it meets one of the
/// five attributes on an element.
pub fn attach<Env: Environment>(
    env: Env,
    element: Env::Element,
    attribute: &str,
    options: EventOptions,
) -> Result<AnyEventModifier<Env>, AttachError> {
    let kind = ModifierKind::from_attribute(attribute)?;
    let mut modifier = kind.bind(env, element, options);
    modifier.activate()?;
    Ok(modifier)
}

/// Why [`attach`] could not produce an active modifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    /// The attribute does not name a known modifier.
    #[error(transparent)]
    Parse(#[from] ParseModifierError),
    /// The environment refused the listener.
    #[error(transparent)]
    Activate(#[from] ModifierError),
}

/// Convenience imports for applications.
pub mod prelude {
    pub use crate::{attach, AttachError};
    pub use event_modifiers_core::prelude::*;

    #[cfg(feature = "web")]
    pub use event_modifiers_platform_web::{WebElement, WebEnvironment, WebEvent};
}
