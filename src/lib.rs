//! Terminal client for ILS inventory lookups.
//!
//! The app follows a Redux/Elm-inspired dispatch architecture:
//!
//! 1. Input event -> component `handle_event` -> messages ([`action::Action`])
//! 2. Messages dispatched to an [`dispatch::EffectStore`]
//! 3. The pure [`reducer::reducer`] updates [`state::AppState`] and declares
//!    [`effect::Effect`]s
//! 4. The main loop executes effects by spawning proxy calls on the
//!    [`transport::ProxyTransport`]; completions come back as `Did*` messages
//! 5. If state changed, re-render
//!
//! The interesting part is the generic lookup dispatch: one control that
//! serializes the current form into a payload, POSTs it to the endpoint named
//! by the selected action, tracks the idle/waiting/settled/failed lifecycle,
//! and routes the decoded envelope into the action's result renderer plus a
//! shared fault list. Which form is shown and how its result is displayed is
//! resolved through the closed [`registry`].

pub mod action;
pub mod components;
pub mod dispatch;
pub mod effect;
pub mod form;
pub mod reducer;
pub mod registry;
pub mod state;
pub mod testing;
pub mod transport;
