//! Application state - single source of truth.
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use serde_json::Value;

use crate::form::FormState;
use crate::registry::{self, ActionName};
use crate::transport::FaultList;

/// Lifecycle of the bound lookup. Cyclic: every submit starts a new
/// `Waiting` pass; rebinding tears the whole dispatch down instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchPhase {
    /// Nothing submitted since the action was bound.
    #[default]
    Idle,
    /// A request is in flight.
    Waiting,
    /// The proxy answered; `body`/`faults` hold the outcome.
    Settled,
    /// The call failed below the service level (HTTP, decode, network).
    Failed,
}

/// Outcome of the bound action's current lifecycle. Owned by exactly one
/// bind; rebinding replaces it wholesale rather than migrating it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchState {
    pub phase: DispatchPhase,
    /// Action-specific result data from the last settled response.
    pub body: Option<Value>,
    /// Service-reported business faults from the last settled response.
    pub faults: Option<FaultList>,
    /// Transport-level failure message, set while `phase` is `Failed`.
    pub transport_error: Option<String>,
}

impl DispatchState {
    pub fn waiting(&self) -> bool {
        self.phase == DispatchPhase::Waiting
    }
}

/// Which pane receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Picker,
    Form,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Picker => Focus::Form,
            Focus::Form => Focus::Picker,
        }
    }
}

/// Everything the UI needs to render.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The globally selected action.
    pub selected: ActionName,
    pub focus: Focus,
    /// Form for the selected action, rebuilt on every rebind.
    pub form: FormState,
    pub dispatch: DispatchState,
    /// Bind token: bumped on every rebind so completions spawned under a
    /// superseded bind can be discarded when they eventually settle.
    pub generation: u64,
    /// Animation frame counter for the waiting spinner.
    pub tick_count: u32,
}

impl AppState {
    pub fn new(initial: ActionName) -> Self {
        Self {
            selected: initial,
            focus: Focus::default(),
            form: FormState::from_specs(registry::descriptor(initial).fields),
            dispatch: DispatchState::default(),
            generation: 0,
            tick_count: 0,
        }
    }

    /// Rebind to `action`: fresh form, fresh idle dispatch, new generation.
    /// Any in-flight request keeps running but its settlement no longer
    /// applies here.
    pub fn bind(&mut self, action: ActionName) {
        self.selected = action;
        self.form = FormState::from_specs(registry::descriptor(action).fields);
        self.dispatch = DispatchState::default();
        self.generation += 1;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ActionName::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_yields_fresh_idle_dispatch() {
        let mut state = AppState::default();
        state.dispatch.phase = DispatchPhase::Settled;
        state.dispatch.body = Some(serde_json::json!({"IsAvailable": "true"}));
        state.form.set_focused_value("stale".into());
        let generation = state.generation;

        state.bind(ActionName::GetPartsAvailability);

        assert_eq!(state.selected, ActionName::GetPartsAvailability);
        assert_eq!(state.dispatch, DispatchState::default());
        assert!(state.form.fields.iter().all(|f| f.value.is_empty()));
        assert_eq!(state.generation, generation + 1);
    }

    #[test]
    fn waiting_tracks_phase() {
        let mut dispatch = DispatchState::default();
        assert!(!dispatch.waiting());
        dispatch.phase = DispatchPhase::Waiting;
        assert!(dispatch.waiting());
    }
}
