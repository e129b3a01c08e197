//! In-flight marker: visible exactly while a request is waiting.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct WaitingIndicator;

pub struct WaitingIndicatorProps {
    pub waiting: bool,
    pub tick_count: u32,
}

impl Component for WaitingIndicator {
    type Props<'a> = WaitingIndicatorProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if !props.waiting {
            return;
        }
        let spinner = SPINNERS[(props.tick_count as usize / 2) % SPINNERS.len()];
        let line = Line::from(vec![
            Span::styled(format!(" {} ", spinner), Style::default().fg(Color::Cyan)),
            Span::styled("Calling ILS..", Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
