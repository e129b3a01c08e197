//! Reusable dispatch control: a store whose reducer reports state changes
//! and declares side effects.
//!
//! Effects are descriptions of work, not the work itself. The reducer stays
//! pure; the main loop owns execution (spawning the async proxy call) and
//! feeds completions back in as new actions.

use std::marker::PhantomData;

/// Outcome of dispatching one action: whether the state changed (and a
/// re-render is needed) plus any effects to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    pub changed: bool,
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that handles one action and declares the resulting effects.
pub type Reducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Centralized state container with an effect-aware reducer.
///
/// The store is the single point of mutation: everything the UI renders
/// lives in `S`, and only `dispatch` may change it.
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: Reducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E> {
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable access for initialization; prefer dispatching actions.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}
