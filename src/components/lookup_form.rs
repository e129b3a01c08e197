//! The action's request form: one labeled input row per field spec.
//!
//! Editing happens inline on the focused field with a movable cursor;
//! every keystroke emits `FormEdit` with the new value and Enter submits
//! the whole form.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, EventKind};
use crate::action::Action;
use crate::form::FormState;
use crate::registry::ActionName;

const LABEL_WIDTH: usize = 10;

pub struct LookupForm {
    /// Cursor byte position inside the focused field's value.
    cursor: usize,
    /// Which field the cursor belonged to; focus moves reset it to the end.
    cursor_field: usize,
}

pub struct LookupFormProps<'a> {
    pub form: &'a FormState,
    pub selected: ActionName,
    pub is_focused: bool,
}

impl Default for LookupForm {
    fn default() -> Self {
        Self {
            cursor: 0,
            cursor_field: 0,
        }
    }
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn sync_cursor(&mut self, form: &FormState) {
        let value_len = form.focused_field().map(|f| f.value.len()).unwrap_or(0);
        if self.cursor_field != form.focused {
            self.cursor_field = form.focused;
            self.cursor = value_len;
        }
        self.cursor = self.cursor.min(value_len);
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut pos = self.cursor - 1;
            while pos > 0 && !value.is_char_boundary(pos) {
                pos -= 1;
            }
            self.cursor = pos;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut pos = self.cursor + 1;
            while pos < value.len() && !value.is_char_boundary(pos) {
                pos += 1;
            }
            self.cursor = pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let char_start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        let after = &value[self.cursor..];
        let (_, c) = after.char_indices().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(new_value)
    }
}

impl Component<Action> for LookupForm {
    type Props<'a> = LookupFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.sync_cursor(props.form);
        let value = props
            .form
            .focused_field()
            .map(|f| f.value.as_str())
            .unwrap_or("");

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some(Action::FormEdit(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab => Some(Action::FormFocusPrev),
            KeyCode::Down => Some(Action::FormFocusNext),
            KeyCode::Enter => Some(Action::LookupSubmit),
            KeyCode::Char(c) => {
                let new_value = self.insert_char(value, c);
                Some(Action::FormEdit(new_value))
            }
            KeyCode::Backspace => self.delete_char_before(value).map(Action::FormEdit),
            KeyCode::Delete => self.delete_char_at(value).map(Action::FormEdit),
            KeyCode::Left => {
                self.move_cursor_left(value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = value.len();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync_cursor(props.form);

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", props.selected.as_str()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (i, field) in props.form.fields.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let row = Rect {
                x: inner.x,
                y: inner.y + i as u16,
                width: inner.width,
                height: 1,
            };

            let focused = props.is_focused && i == props.form.focused;
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let line = Line::from(vec![
                Span::styled(
                    format!(" {:<width$} ", field.label, width = LABEL_WIDTH),
                    label_style,
                ),
                Span::raw(field.value.clone()),
            ]);
            frame.render_widget(Paragraph::new(line), row);

            if focused {
                let cursor_cols = field.value[..self.cursor].chars().count() as u16;
                let cursor_x = row.x + 1 + LABEL_WIDTH as u16 + 1 + cursor_cols;
                if cursor_x < row.x + row.width {
                    frame.set_cursor_position((cursor_x, row.y));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldSpec, FormState};
    use crate::testing::{char_key, code_key, ctrl_key, RenderHarness};

    static SPECS: [FieldSpec; 2] = [
        FieldSpec {
            label: "UserId",
            name: "UserId",
        },
        FieldSpec {
            label: "PN",
            name: "PartNumber",
        },
    ];

    fn props<'a>(form: &'a FormState) -> LookupFormProps<'a> {
        LookupFormProps {
            form,
            selected: ActionName::IsPartAvailable,
            is_focused: true,
        }
    }

    fn handle(component: &mut LookupForm, form: &FormState, key: crossterm::event::KeyEvent) -> Vec<Action> {
        component
            .handle_event(&EventKind::Key(key), props(form))
            .into_iter()
            .collect()
    }

    #[test]
    fn typing_emits_edit_with_new_value() {
        let mut component = LookupForm::new();
        let mut form = FormState::from_specs(&SPECS);
        form.set_focused_value("u".into());

        let actions = handle(&mut component, &form, char_key('x'));

        assert_eq!(actions, vec![Action::FormEdit("ux".into())]);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut component = LookupForm::new();
        let mut form = FormState::from_specs(&SPECS);
        form.set_focused_value("abc".into());

        let actions = handle(&mut component, &form, code_key(KeyCode::Backspace));

        assert_eq!(actions, vec![Action::FormEdit("ab".into())]);
    }

    #[test]
    fn ctrl_u_clears_the_field() {
        let mut component = LookupForm::new();
        let mut form = FormState::from_specs(&SPECS);
        form.set_focused_value("abc".into());

        let actions = handle(&mut component, &form, ctrl_key('u'));

        assert_eq!(actions, vec![Action::FormEdit(String::new())]);
    }

    #[test]
    fn enter_submits_the_lookup() {
        let mut component = LookupForm::new();
        let form = FormState::from_specs(&SPECS);

        let actions = handle(&mut component, &form, code_key(KeyCode::Enter));

        assert_eq!(actions, vec![Action::LookupSubmit]);
    }

    #[test]
    fn vertical_keys_move_focus() {
        let mut component = LookupForm::new();
        let form = FormState::from_specs(&SPECS);

        assert_eq!(
            handle(&mut component, &form, code_key(KeyCode::Down)),
            vec![Action::FormFocusNext]
        );
        assert_eq!(
            handle(&mut component, &form, code_key(KeyCode::Up)),
            vec![Action::FormFocusPrev]
        );
    }

    #[test]
    fn focus_change_moves_cursor_to_end_of_new_field() {
        let mut component = LookupForm::new();
        let mut form = FormState::from_specs(&SPECS);
        form.set_focused_value("first".into());
        // Establish cursor state on field 0.
        handle(&mut component, &form, code_key(KeyCode::Left));

        form.focused = 1;
        form.set_focused_value("9910".into());
        let actions = handle(&mut component, &form, char_key('A'));

        assert_eq!(actions, vec![Action::FormEdit("9910A".into())]);
    }

    #[test]
    fn unfocused_form_ignores_input() {
        let mut component = LookupForm::new();
        let form = FormState::from_specs(&SPECS);
        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(char_key('x')),
                LookupFormProps {
                    form: &form,
                    selected: ActionName::IsPartAvailable,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn renders_labels_and_values() {
        let mut render = RenderHarness::new(50, 4);
        let mut component = LookupForm::new();
        let mut form = FormState::from_specs(&SPECS);
        form.set_focused_value("operator1".into());

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), props(&form));
        });

        assert!(output.contains("UserId"));
        assert!(output.contains("operator1"));
        assert!(output.contains("PN"));
        assert!(output.contains("IsPartAvailable"));
    }
}
