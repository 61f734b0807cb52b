use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, MessageKind};

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.message {
        Some(msg) => {
            let (icon, color) = match msg.kind {
                MessageKind::Info => ("ℹ", Color::Cyan),
                MessageKind::Success => ("✓", Color::Green),
                MessageKind::Error => ("✗", Color::Red),
            };
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{} {}", icon, msg.text), Style::default().fg(color)),
            ])
        }
        None => Line::from(Span::styled(
            " [?] help",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
