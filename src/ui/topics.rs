use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::progress::TopicProgress;
use crate::state::AppState;

const BAR_WIDTH: usize = 10;

pub fn draw_topics(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    let greeting = state
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Học viên".to_string());
    lines.push(Line::from(Span::styled(
        format!("  Chào mừng, {}", greeting),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let inner_height = area.height.saturating_sub(2) as usize;
    let visible = inner_height.saturating_sub(lines.len());
    let scroll = (state.topic_cursor + 1).saturating_sub(visible);

    for (idx, topic) in state.deck.topics.iter().enumerate().skip(scroll).take(visible) {
        let progress = TopicProgress::load(state.store.as_ref(), &topic.id);
        let total = topic.words.len();
        let pct = progress.mastery_percent(total);
        // Stored ids can outnumber the words if the deck shrank
        let filled = ((pct as usize * BAR_WIDTH) / 100).min(BAR_WIDTH);

        let is_current = idx == state.topic_cursor;
        let style = if is_current {
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::styled(if is_current { " ▸ " } else { "   " }, style),
            Span::styled(format!("{:<16}", topic.name), style),
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                "░".repeat(BAR_WIDTH - filled),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(" {:>3}%  ", pct)),
            Span::styled(
                format!("♥ {}", progress.saved_count()),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!("  {} words", total),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} Topics ", state.deck.topics.len()))
        .title_style(Style::default().add_modifier(Modifier::BOLD));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
