//! Per-instance event options and the guard that applies them.

use crate::environment::RawEvent;

/// Side effects a modifier applies to every delivered event before its own
/// filtering runs.
///
/// `None` and `Some(false)` both mean "leave the event alone". The owner of a
/// modifier may swap the options between events; modifiers read them on
/// every delivery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EventOptions {
    pub prevent_default: Option<bool>,
    pub stop_propagation: Option<bool>,
}

impl EventOptions {
    /// Options with no side effects.
    pub const fn new() -> Self {
        Self {
            prevent_default: None,
            stop_propagation: None,
        }
    }

    /// Sets whether the guard calls `prevent_default` on each event.
    pub const fn with_prevent_default(mut self, enabled: bool) -> Self {
        self.prevent_default = Some(enabled);
        self
    }

    /// Sets whether the guard calls `stop_propagation` on each event.
    pub const fn with_stop_propagation(mut self, enabled: bool) -> Self {
        self.stop_propagation = Some(enabled);
        self
    }

    /// True only for `Some(true)`.
    pub fn should_prevent_default(&self) -> bool {
        self.prevent_default.unwrap_or(false)
    }

    /// True only for `Some(true)`.
    pub fn should_stop_propagation(&self) -> bool {
        self.stop_propagation.unwrap_or(false)
    }
}

/// Applies `options` to `event`: default prevention first, then
/// propagation stop.
pub fn apply_guard<E>(options: &EventOptions, event: &E)
where
    E: RawEvent + ?Sized,
{
    if options.should_prevent_default() {
        event.prevent_default();
    }
    if options.should_stop_propagation() {
        event.stop_propagation();
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
