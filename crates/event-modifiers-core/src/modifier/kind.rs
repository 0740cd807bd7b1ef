use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The only raw event the modifiers listen to.
pub const CLICK: &str = "click";

/// Declarative name of each modifier, as written after `click.` in a
/// binding attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Stop,
    Prevent,
    SelfTarget,
    Once,
    Outside,
}

impl ModifierKind {
    pub const ALL: [ModifierKind; 5] = [
        ModifierKind::Stop,
        ModifierKind::Prevent,
        ModifierKind::SelfTarget,
        ModifierKind::Once,
        ModifierKind::Outside,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ModifierKind::Stop => "stop",
            ModifierKind::Prevent => "prevent",
            ModifierKind::SelfTarget => "self",
            ModifierKind::Once => "once",
            ModifierKind::Outside => "outside",
        }
    }

    /// Full binding attribute, e.g. `click.outside`.
    pub fn attribute(self) -> String {
        format!("{CLICK}.{}", self.name())
    }

    /// Parses a binding attribute such as `click.self`.
    pub fn from_attribute(attribute: &str) -> Result<Self, ParseModifierError> {
        let (event, modifier) = attribute
            .split_once('.')
            .ok_or_else(|| ParseModifierError::MalformedAttribute(attribute.to_owned()))?;
        if event != CLICK {
            return Err(ParseModifierError::UnsupportedEvent(event.to_owned()));
        }
        modifier.parse()
    }

    /// Whether the listener goes on the document instead of the element.
    pub const fn listens_on_document(self) -> bool {
        matches!(self, ModifierKind::Outside)
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModifierKind {
    type Err = ParseModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModifierKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseModifierError::UnknownModifier(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseModifierError {
    #[error("unknown event modifier `{0}`")]
    UnknownModifier(String),
    #[error("event `{0}` has no modifiers, only `click` does")]
    UnsupportedEvent(String),
    #[error("`{0}` is not of the form `click.<modifier>`")]
    MalformedAttribute(String),
}
