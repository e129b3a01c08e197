//! UI components.
//!
//! Components are pure: props carry all read-only data, `handle_event`
//! returns actions without touching external state, and `render` is a
//! function of props plus internal view state (cursor position).

pub mod action_picker;
pub mod console;
pub mod faults_view;
pub mod lookup_form;
pub mod results;
pub mod waiting_indicator;

use ratatui::{layout::Rect, Frame};

pub use action_picker::{ActionPicker, ActionPickerProps};
pub use console::{LookupConsole, LookupConsoleProps};
pub use faults_view::{FaultsView, FaultsViewProps};
pub use lookup_form::{LookupForm, LookupFormProps};
pub use waiting_indicator::{WaitingIndicator, WaitingIndicatorProps, SPINNERS};

/// Input events as seen by components.
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(crossterm::event::KeyEvent),
    Resize(u16, u16),
}

/// A pure UI element that renders from props and emits actions.
pub trait Component<A = ()> {
    /// Read-only data required to render.
    type Props<'a>;

    /// Handle an event and return actions to dispatch. Render-only
    /// components keep the default.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
