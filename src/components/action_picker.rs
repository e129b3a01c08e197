//! Action picker: selects which registered action the dispatch is bound to.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, EventKind};
use crate::action::Action;
use crate::registry::ActionName;

pub struct ActionPicker;

pub struct ActionPickerProps {
    pub selected: ActionName,
    pub is_focused: bool,
}

impl Component<Action> for ActionPicker {
    type Props<'a> = ActionPickerProps;

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
        match key.code {
            KeyCode::Left | KeyCode::Up => Some(Action::PickerSelect(props.selected.prev())),
            KeyCode::Right | KeyCode::Down => Some(Action::PickerSelect(props.selected.next())),
            // Enter hands focus to the form of the chosen action.
            KeyCode::Enter => Some(Action::FocusToggle),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Action ");

        let mut spans = Vec::with_capacity(ActionName::ALL.len() * 2);
        for action in ActionName::ALL {
            let style = if action == props.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", action.as_str()), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{code_key, RenderHarness};

    fn props(selected: ActionName, is_focused: bool) -> ActionPickerProps {
        ActionPickerProps {
            selected,
            is_focused,
        }
    }

    #[test]
    fn arrows_cycle_selection() {
        let mut picker = ActionPicker;

        let actions: Vec<_> = picker
            .handle_event(
                &EventKind::Key(code_key(KeyCode::Right)),
                props(ActionName::IsPartAvailable, true),
            )
            .into_iter()
            .collect();
        assert_eq!(
            actions,
            vec![Action::PickerSelect(ActionName::GetPartsAvailability)]
        );

        let actions: Vec<_> = picker
            .handle_event(
                &EventKind::Key(code_key(KeyCode::Left)),
                props(ActionName::IsPartAvailable, true),
            )
            .into_iter()
            .collect();
        assert_eq!(
            actions,
            vec![Action::PickerSelect(ActionName::GetPartsAvailability)]
        );
    }

    #[test]
    fn unfocused_picker_ignores_input() {
        let mut picker = ActionPicker;
        let actions: Vec<_> = picker
            .handle_event(
                &EventKind::Key(code_key(KeyCode::Right)),
                props(ActionName::IsPartAvailable, false),
            )
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn renders_every_registered_action() {
        let mut render = RenderHarness::new(60, 3);
        let mut picker = ActionPicker;

        let output = render.render_to_string_plain(|frame| {
            picker.render(
                frame,
                frame.area(),
                props(ActionName::IsPartAvailable, true),
            );
        });

        assert!(output.contains("IsPartAvailable"));
        assert!(output.contains("GetPartsAvailability"));
    }
}
