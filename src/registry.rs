//! The closed action registry.
//!
//! Each remote operation is one [`ActionName`] variant mapped to a static
//! [`ActionDescriptor`]: the form contract (which named fields to render and
//! submit) and the result renderer. The table is a tagged-variant lookup
//! resolved at compile time; no runtime type inspection.

use std::fmt;
use std::str::FromStr;

use ratatui::text::Line;
use serde_json::Value;
use thiserror::Error;

use crate::components::results;
use crate::form::FieldSpec;

/// One named remote operation. Identifies both the proxy endpoint and the
/// plugin pair used to drive it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionName {
    #[default]
    IsPartAvailable,
    GetPartsAvailability,
}

impl ActionName {
    pub const ALL: [ActionName; 2] = [
        ActionName::IsPartAvailable,
        ActionName::GetPartsAvailability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionName::IsPartAvailable => "IsPartAvailable",
            ActionName::GetPartsAvailability => "GetPartsAvailability",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0)
    }

    /// Next action in picker order, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous action in picker order, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name that is not in the registry. Unreachable from the picker, which
/// iterates the same enum, but the string entry points (CLI) still report it.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown ILS action: {0}")]
pub struct UnknownActionError(pub String);

impl FromStr for ActionName {
    type Err = UnknownActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownActionError(s.to_string()))
    }
}

/// Renders the settled body into display lines, or nothing if the body
/// lacks the shape this action expects.
pub type ResultRenderer = fn(&Value) -> Option<Vec<Line<'static>>>;

/// The plugin pair for one action: its form contract and result renderer.
pub struct ActionDescriptor {
    pub fields: &'static [FieldSpec],
    pub render_result: ResultRenderer,
}

static LOOKUP_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        label: "UserId",
        name: "UserId",
    },
    FieldSpec {
        label: "Password",
        name: "Password",
    },
    FieldSpec {
        label: "PN",
        name: "PartNumber",
    },
];

static IS_PART_AVAILABLE: ActionDescriptor = ActionDescriptor {
    fields: &LOOKUP_FIELDS,
    render_result: results::is_part_available,
};

static GET_PARTS_AVAILABILITY: ActionDescriptor = ActionDescriptor {
    fields: &LOOKUP_FIELDS,
    render_result: results::parts_availability,
};

/// Resolve the plugin pair for an action. Total over the closed enum; the
/// fallible string path is [`ActionName::from_str`].
pub fn descriptor(action: ActionName) -> &'static ActionDescriptor {
    match action {
        ActionName::IsPartAvailable => &IS_PART_AVAILABLE,
        ActionName::GetPartsAvailability => &GET_PARTS_AVAILABILITY,
    }
}
