use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_flashcard(f: &mut Frame, area: Rect, state: &AppState) {
    let (Some(topic), Some(word)) = (state.current_topic(), state.current_word()) else {
        return;
    };

    let (pos, len) = state.cards.position();
    let counter = if state.cards.in_review() {
        format!("Từ {} / {} (ôn tập)", pos, len)
    } else {
        format!("Từ {} / {}", pos, len)
    };

    let mastered = state.progress.is_mastered(&word.word);
    let saved = state.progress.is_saved(&word.word);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(counter, Style::default().fg(Color::DarkGray)),
            Span::raw("    "),
            Span::styled(
                if mastered { "✓ đã thuộc" } else { "· chưa thuộc" },
                Style::default().fg(if mastered { Color::Green } else { Color::DarkGray }),
            ),
            Span::raw("  "),
            Span::styled(
                if saved { "♥ đã lưu" } else { "♡" },
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            word.word.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if state.cards.is_revealed() {
        lines.push(Line::from(Span::styled(
            format!("Nghĩa: {}", word.translation),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(""));
        if let Some(example) = &word.example {
            lines.push(Line::from(Span::styled(
                format!("\"{}\"", example),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "[Space] Hiện nghĩa",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(
        " {} · đã lưu {}/{} · đã thuộc {}/{} ",
        topic.name,
        state.progress.saved_count(),
        topic.words.len(),
        state.progress.mastered_count(),
        topic.words.len()
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
