//! Service fault list: one line per fault message, in the order received.
//!
//! A lone fault object is treated as a one-element sequence. Renders
//! nothing when the last response carried no faults.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::transport::FaultList;

pub struct FaultsView;

pub struct FaultsViewProps<'a> {
    pub faults: Option<&'a FaultList>,
}

impl FaultsView {
    /// Rows the fault list needs; lets the parent size its layout slot.
    pub fn height(faults: Option<&FaultList>) -> u16 {
        faults.map(|f| f.as_slice().len() as u16).unwrap_or(0)
    }
}

impl Component for FaultsView {
    type Props<'a> = FaultsViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(faults) = props.faults else {
            return;
        };
        let lines: Vec<Line> = faults
            .as_slice()
            .iter()
            .map(|fault| {
                Line::from(vec![
                    Span::styled(" • ", Style::default().fg(Color::Red)),
                    Span::styled(fault.message.clone(), Style::default().fg(Color::Red)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RenderHarness;
    use crate::transport::Fault;
    use serde_json::Map;

    fn fault(message: &str) -> Fault {
        Fault {
            message: message.to_string(),
            extra: Map::new(),
        }
    }

    fn render(faults: Option<&FaultList>) -> String {
        let mut render = RenderHarness::new(40, 4);
        let mut view = FaultsView;
        render.render_to_string_plain(|frame| {
            view.render(frame, frame.area(), FaultsViewProps { faults });
        })
    }

    #[test]
    fn single_fault_renders_one_item() {
        let faults = FaultList::One(fault("X"));
        let output = render(Some(&faults));
        assert!(output.contains("X"));
        assert_eq!(FaultsView::height(Some(&faults)), 1);
    }

    #[test]
    fn fault_list_renders_in_order() {
        let faults = FaultList::Many(vec![fault("X"), fault("Y")]);
        let output = render(Some(&faults));

        let x_at = output.find('X').expect("first fault");
        let y_at = output.find('Y').expect("second fault");
        assert!(x_at < y_at);
        assert_eq!(FaultsView::height(Some(&faults)), 2);
    }

    #[test]
    fn absent_faults_render_nothing() {
        let output = render(None);
        assert!(output.trim().is_empty());
        assert_eq!(FaultsView::height(None), 0);
    }
}
