//! Application messages.
//!
//! Naming convention: intent messages trigger work (`LookupSubmit`), `Did*`
//! messages carry an async outcome back from a spawned task. Proxy
//! completions echo the bind generation they were spawned under so the
//! reducer can drop results that outlived their bind.

use crate::registry::ActionName;
use crate::transport::ResponseEnvelope;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Picker =====
    /// Bind the dispatch to a different action.
    PickerSelect(ActionName),

    // ===== Form =====
    FormFocusNext,
    FormFocusPrev,
    /// Replace the focused field's value.
    FormEdit(String),

    // ===== Lookup lifecycle =====
    /// Intent: serialize the form and call the proxy.
    LookupSubmit,
    /// Result: the proxy answered with a decoded envelope.
    ProxyDidRespond {
        generation: u64,
        envelope: ResponseEnvelope,
    },
    /// Result: the call failed at the HTTP/decode/network level.
    ProxyDidFail { generation: u64, message: String },

    // ===== UI =====
    /// Move keyboard focus between picker and form.
    FocusToggle,
    /// Periodic tick for the waiting spinner.
    Tick,
    /// Exit the application (handled by the main loop, not the reducer).
    Quit,
}

impl Action {
    /// Stable name for the structured log.
    pub fn name(&self) -> &'static str {
        match self {
            Action::PickerSelect(_) => "PickerSelect",
            Action::FormFocusNext => "FormFocusNext",
            Action::FormFocusPrev => "FormFocusPrev",
            Action::FormEdit(_) => "FormEdit",
            Action::LookupSubmit => "LookupSubmit",
            Action::ProxyDidRespond { .. } => "ProxyDidRespond",
            Action::ProxyDidFail { .. } => "ProxyDidFail",
            Action::FocusToggle => "FocusToggle",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
