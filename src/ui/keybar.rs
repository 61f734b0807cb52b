use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, InputMode, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = match (state.screen, state.input_mode) {
        (Screen::Login, _) => vec![
            ("Tab", "next field"),
            ("Enter", "confirm"),
            ("Ctrl+Q", "quit"),
        ],
        (Screen::Topics, _) => vec![
            ("↑/↓", "select"),
            ("Enter", "study"),
            ("t", "test"),
            ("L", "log out"),
            ("?", "help"),
            ("q", "quit"),
        ],
        (Screen::Flashcards, _) if state.cards.in_review() => vec![
            ("Space", "reveal/next"),
            ("m", "mastered"),
            ("s", "save"),
            ("p", "listen"),
            ("r", "end review"),
            ("Esc", "topics"),
        ],
        (Screen::Flashcards, _) => vec![
            ("Space", "reveal/next"),
            ("←/→", "prev/next"),
            ("m", "mastered"),
            ("s", "save"),
            ("p", "listen"),
            ("r", "review"),
            ("t", "test"),
            ("Esc", "topics"),
        ],
        (Screen::Quiz, InputMode::TextInput) => vec![
            ("type", "answer"),
            ("Enter", "submit"),
            ("Esc", "leave quiz"),
        ],
        (Screen::Quiz, InputMode::ChoiceSelect) => vec![
            ("1-4", "answer"),
            ("↑/↓", "move"),
            ("Enter", "choose"),
            ("p", "listen"),
            ("Esc", "leave quiz"),
        ],
        (Screen::Quiz, _) => vec![("Esc", "leave quiz")],
        (Screen::Results, _) => vec![
            ("r", "retake"),
            ("Enter", "back to words"),
            ("Esc", "topics"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
