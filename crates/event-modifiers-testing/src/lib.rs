//! Testing utilities for event modifiers: an in-memory document that
//! implements [`Environment`](event_modifiers_core::Environment) and spies
//! for modifier output.

pub mod document;
pub mod spy;

pub use document::{NodeId, TestDocument, TestElement, TestEvent};
pub use spy::EmissionLog;

pub mod prelude {
    pub use crate::document::*;
    pub use crate::spy::*;
}
