//! Reducer - pure function `(state, action) -> DispatchResult<Effect>`.
//!
//! All state transitions happen here, including the lookup lifecycle:
//! `Idle -> Waiting -> Settled | Failed -> Waiting -> ...`, reset to `Idle`
//! by rebinding. A `Failed` phase is modeled explicitly so transport-level
//! errors never leave the console waiting forever.

use tracing::warn;

use crate::action::Action;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::state::{AppState, DispatchPhase, DispatchState, Focus};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Picker =====
        Action::PickerSelect(name) => {
            if state.selected == name {
                return DispatchResult::unchanged();
            }
            // A brand-new bind, never a mutation of the old one.
            state.bind(name);
            DispatchResult::changed()
        }

        // ===== Form =====
        Action::FormFocusNext => {
            if state.focus != Focus::Form {
                return DispatchResult::unchanged();
            }
            state.form.focus_next();
            DispatchResult::changed()
        }

        Action::FormFocusPrev => {
            if state.focus != Focus::Form {
                return DispatchResult::unchanged();
            }
            state.form.focus_prev();
            DispatchResult::changed()
        }

        Action::FormEdit(value) => {
            state.form.set_focused_value(value);
            DispatchResult::changed()
        }

        // ===== Lookup lifecycle =====
        Action::LookupSubmit => {
            // One request per bind at a time: a submit while waiting is
            // dropped instead of racing a second call.
            if state.dispatch.phase == DispatchPhase::Waiting {
                return DispatchResult::unchanged();
            }
            let payload = state.form.payload();
            state.dispatch = DispatchState {
                phase: DispatchPhase::Waiting,
                ..DispatchState::default()
            };
            DispatchResult::changed_with(Effect::CallProxy {
                action: state.selected,
                payload,
                generation: state.generation,
            })
        }

        Action::ProxyDidRespond {
            generation,
            envelope,
        } => {
            if generation != state.generation {
                // Settled after a rebind; the result belongs to a dead bind.
                warn!(
                    stale = generation,
                    current = state.generation,
                    "discarding stale proxy response"
                );
                return DispatchResult::unchanged();
            }
            state.dispatch.phase = DispatchPhase::Settled;
            state.dispatch.body = if envelope.body.is_null() {
                None
            } else {
                Some(envelope.body)
            };
            state.dispatch.faults = envelope.faults;
            state.dispatch.transport_error = None;
            DispatchResult::changed()
        }

        Action::ProxyDidFail {
            generation,
            message,
        } => {
            if generation != state.generation {
                warn!(
                    stale = generation,
                    current = state.generation,
                    "discarding stale proxy failure"
                );
                return DispatchResult::unchanged();
            }
            state.dispatch.phase = DispatchPhase::Failed;
            state.dispatch.transport_error = Some(message);
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::FocusToggle => {
            state.focus = state.focus.toggle();
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the waiting spinner animates.
            if state.dispatch.waiting() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
