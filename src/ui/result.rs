use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::Grade;
use crate::state::AppState;

const BAR_WIDTH: usize = 30;

pub fn draw_results(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(quiz) = state.quiz.as_ref() else {
        return;
    };
    let score = quiz.score();
    let grade = score.grade();
    let color = match grade {
        Grade::Excellent => Color::Green,
        Grade::Good => Color::Yellow,
        Grade::NeedsWork => Color::Red,
    };
    let filled = ((score.ratio() * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let topic_name = state
        .current_topic()
        .map(|t| t.name.as_str())
        .unwrap_or("");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓  Kết quả bài kiểm tra",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Bạn đã hoàn thành bài kiểm tra chủ đề {}", topic_name)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}/{}", score.correct, score.total),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                "░".repeat(BAR_WIDTH - filled),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(grade.message(), Style::default().fg(color))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r] Làm lại bài kiểm tra", Style::default().fg(Color::Cyan)),
            Span::raw("    "),
            Span::styled("[Enter] Quay lại học từ", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
