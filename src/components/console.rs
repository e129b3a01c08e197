//! Root component: the action picker, the bound action's form, and the
//! dispatch outcome (waiting marker, transport error, faults, result).

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{
    ActionPicker, ActionPickerProps, Component, EventKind, FaultsView, FaultsViewProps,
    LookupForm, LookupFormProps, WaitingIndicator, WaitingIndicatorProps,
};
use crate::action::Action;
use crate::registry;
use crate::state::{AppState, Focus};

pub struct LookupConsole {
    picker: ActionPicker,
    form: LookupForm,
}

pub struct LookupConsoleProps<'a> {
    pub state: &'a AppState,
}

impl Default for LookupConsole {
    fn default() -> Self {
        Self {
            picker: ActionPicker,
            form: LookupForm::new(),
        }
    }
}

impl LookupConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if state.dispatch.waiting() {
            WaitingIndicator.render(
                frame,
                area,
                WaitingIndicatorProps {
                    waiting: true,
                    tick_count: state.tick_count,
                },
            );
        } else if let Some(error) = state.dispatch.transport_error.as_deref() {
            let line = Line::from(vec![
                Span::styled(" ✖ ", Style::default().fg(Color::Red)),
                Span::styled(error.to_string(), Style::default().fg(Color::Red)),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
    }

    fn render_result(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(body) = state.dispatch.body.as_ref() else {
            return;
        };
        let render_result = registry::descriptor(state.selected).render_result;
        if let Some(lines) = render_result(body) {
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}

impl Component<Action> for LookupConsole {
    type Props<'a> = LookupConsoleProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;
        let EventKind::Key(key) = event else {
            // Resize just re-renders; layout is recomputed every frame.
            return vec![];
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }
        match key.code {
            KeyCode::Tab => return vec![Action::FocusToggle],
            KeyCode::Esc => {
                return match state.focus {
                    Focus::Form => vec![Action::FocusToggle],
                    Focus::Picker => vec![Action::Quit],
                };
            }
            KeyCode::Char('q') if state.focus == Focus::Picker => return vec![Action::Quit],
            _ => {}
        }

        match state.focus {
            Focus::Picker => self
                .picker
                .handle_event(
                    event,
                    ActionPickerProps {
                        selected: state.selected,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
            Focus::Form => self
                .form
                .handle_event(
                    event,
                    LookupFormProps {
                        form: &state.form,
                        selected: state.selected,
                        is_focused: true,
                    },
                )
                .into_iter()
                .collect(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" ILS Lookup ")
            .title_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let form_height = state.form.fields.len() as u16 + 2;
        let faults_height = FaultsView::height(state.dispatch.faults.as_ref());
        let chunks = Layout::vertical([
            Constraint::Length(3),           // picker
            Constraint::Length(form_height), // form
            Constraint::Length(1),           // waiting / transport error
            Constraint::Length(faults_height),
            Constraint::Min(0), // result
            Constraint::Length(1), // help
        ])
        .split(inner);

        self.picker.render(
            frame,
            chunks[0],
            ActionPickerProps {
                selected: state.selected,
                is_focused: state.focus == Focus::Picker,
            },
        );
        self.form.render(
            frame,
            chunks[1],
            LookupFormProps {
                form: &state.form,
                selected: state.selected,
                is_focused: state.focus == Focus::Form,
            },
        );
        self.render_status(frame, chunks[2], state);
        FaultsView.render(
            frame,
            chunks[3],
            FaultsViewProps {
                faults: state.dispatch.faults.as_ref(),
            },
        );
        self.render_result(frame, chunks[4], state);

        let help = Line::from(vec![
            Span::styled(" tab", Style::default().fg(Color::Cyan)),
            Span::styled(" focus  ", Style::default().fg(Color::DarkGray)),
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
            Span::styled("enter", Style::default().fg(Color::Cyan)),
            Span::styled(" submit  ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::styled(" quit ", Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), chunks[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ActionName;
    use crate::testing::{char_key, code_key, ctrl_key};

    fn handle(state: &AppState, key: crossterm::event::KeyEvent) -> Vec<Action> {
        let mut console = LookupConsole::new();
        console
            .handle_event(&EventKind::Key(key), LookupConsoleProps { state })
            .into_iter()
            .collect()
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut state = AppState::default();
        state.focus = Focus::Form;
        assert_eq!(handle(&state, ctrl_key('c')), vec![Action::Quit]);
    }

    #[test]
    fn q_quits_only_from_the_picker() {
        let state = AppState::default();
        assert_eq!(handle(&state, char_key('q')), vec![Action::Quit]);

        let mut state = AppState::default();
        state.focus = Focus::Form;
        // In the form, q is just a character.
        assert_eq!(
            handle(&state, char_key('q')),
            vec![Action::FormEdit("q".into())]
        );
    }

    #[test]
    fn tab_toggles_focus() {
        let state = AppState::default();
        assert_eq!(handle(&state, code_key(KeyCode::Tab)), vec![Action::FocusToggle]);
    }

    #[test]
    fn esc_leaves_the_form_before_quitting() {
        let mut state = AppState::default();
        state.focus = Focus::Form;
        assert_eq!(handle(&state, code_key(KeyCode::Esc)), vec![Action::FocusToggle]);

        state.focus = Focus::Picker;
        assert_eq!(handle(&state, code_key(KeyCode::Esc)), vec![Action::Quit]);
    }

    #[test]
    fn picker_keys_route_to_the_picker() {
        let state = AppState::default();
        assert_eq!(
            handle(&state, code_key(KeyCode::Right)),
            vec![Action::PickerSelect(ActionName::GetPartsAvailability)]
        );
    }
}
