use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, LoginFocus};

pub fn draw_login(f: &mut Frame, area: Rect, state: &AppState) {
    let box_width = area.width.saturating_sub(8).min(48) as usize;
    let masked: String = "•".repeat(state.login_password.chars().count());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome back",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Sign in to your account to continue",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (label, value, focus) in [
        ("Email", state.login_email.as_str(), LoginFocus::Email),
        ("Password", masked.as_str(), LoginFocus::Password),
        ("Name (sign up only)", state.login_name.as_str(), LoginFocus::Name),
    ] {
        lines.push(Line::from(format!("  {}:", label)));
        lines.extend(input_box(value, box_width, state.login_focus == focus));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("[ Log in ]", button_style(state.login_focus == LoginFocus::Login)),
        Span::raw("   "),
        Span::styled("[ Sign up ]", button_style(state.login_focus == LoginFocus::Signup)),
        Span::raw("   "),
        Span::styled(
            "[ Continue with Google ]",
            button_style(state.login_focus == LoginFocus::Google),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Passwords need at least 6 characters.",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}

fn input_box(value: &str, width: usize, focused: bool) -> Vec<Line<'static>> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let shown: String = value.chars().take(width.saturating_sub(1)).collect();
    let cursor = if focused { "▏" } else { " " };
    let padded = format!("{}{:<w$}", shown, cursor, w = width - shown.chars().count().min(width));

    vec![
        Line::from(format!("  ┌{}┐", "─".repeat(width))),
        Line::from(vec![
            Span::raw("  │"),
            Span::styled(padded, style),
            Span::raw("│"),
        ]),
        Line::from(format!("  └{}┘", "─".repeat(width))),
    ]
}

fn button_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Green)
    }
}
