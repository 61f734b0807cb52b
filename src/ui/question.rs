use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::{Question, QuestionKind};
use crate::state::AppState;

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(quiz) = state.quiz.as_ref() else {
        return;
    };
    let Some(question) = quiz.current_question() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(30, 30, 30)))
        .percent(quiz.progress_percent())
        .label(format!(
            "Câu hỏi {}/{}",
            quiz.current_index() + 1,
            quiz.len()
        ));
    f.render_widget(gauge, chunks[0]);

    let answered = quiz.answer_for(&question.id);
    let mut lines: Vec<Line> = vec![Line::from("")];

    if let QuestionKind::ListenChoose { .. } = question.kind {
        lines.push(Line::from(vec![
            Span::styled(
                " 🔊 [p] ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                question.prompt.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!(" {}", question.prompt),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    match &question.kind {
        QuestionKind::MultipleChoice(options) | QuestionKind::ListenChoose { options, .. } => {
            for (i, option) in options.iter().enumerate() {
                lines.push(choice_line(question, i, option, state.choice_cursor, answered));
            }
        }
        QuestionKind::FillBlank => {
            lines.extend(text_input_lines(
                answered.unwrap_or(state.text_input.as_str()),
                area.width.saturating_sub(8) as usize,
                answered.map(|a| question.is_correct(a)),
            ));
        }
    }

    if let Some(answer) = answered {
        lines.push(Line::from(""));
        lines.extend(feedback_lines(question, answer));
    }

    let block = Block::default().borders(Borders::ALL).title(format!(
        " {} ",
        question.kind.name().replace('_', " ")
    ));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, chunks[1]);
}

fn choice_line(
    question: &Question,
    idx: usize,
    option: &str,
    cursor: usize,
    answered: Option<&str>,
) -> Line<'static> {
    let selected = answered.map(|a| a == option).unwrap_or(false);
    let marker = if selected {
        "(●)"
    } else {
        "( )"
    };

    let style = match answered {
        Some(_) if question.is_correct(option) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(_) if selected => Style::default().fg(Color::Red),
        Some(_) => Style::default().fg(Color::DarkGray),
        None if idx == cursor => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        None => Style::default(),
    };

    let pointer = if answered.is_none() && idx == cursor {
        " ▸ "
    } else {
        "   "
    };

    Line::from(vec![
        Span::styled(pointer, style),
        Span::styled(format!("{} {}. {}", marker, idx + 1, option), style),
    ])
}

fn text_input_lines(value: &str, width: usize, correct: Option<bool>) -> Vec<Line<'static>> {
    let style = match correct {
        Some(true) => Style::default().fg(Color::Green),
        Some(false) => Style::default().fg(Color::Red),
        None => Style::default().fg(Color::Yellow),
    };
    let placeholder = value.is_empty() && correct.is_none();
    let text = if placeholder {
        "Nhập câu trả lời...".to_string()
    } else {
        value.chars().take(width).collect()
    };
    let text_style = if placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    };
    let pad = width.saturating_sub(text.chars().count());

    vec![
        Line::from(Span::styled(format!("   ┌{}┐", "─".repeat(width)), style)),
        Line::from(vec![
            Span::styled("   │", style),
            Span::styled(text, text_style),
            Span::raw(" ".repeat(pad)),
            Span::styled("│", style),
        ]),
        Line::from(Span::styled(format!("   └{}┘", "─".repeat(width)), style)),
    ]
}

fn feedback_lines(question: &Question, answer: &str) -> Vec<Line<'static>> {
    if question.is_correct(answer) {
        vec![Line::from(Span::styled(
            "   ✓ Chính xác!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))]
    } else {
        vec![
            Line::from(Span::styled(
                "   ✗ Chưa đúng",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("   Đáp án đúng: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    question.correct_answer.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ]
    }
}
