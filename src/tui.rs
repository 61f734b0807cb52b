use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::error::{Error, Result};
use crate::state::*;
use crate::timer::{spawn_delay, PaceEvent};

pub fn run_tui(mut state: AppState) -> Result<()> {
    enable_raw_mode().map_err(|e| Error::Terminal(format!("Cannot enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| Error::Terminal(format!("Cannot enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| Error::Terminal(format!("Cannot create terminal: {}", e)))?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    let mut pace_rx: Option<mpsc::Receiver<PaceEvent>> = None;

    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| Error::Terminal(format!("Draw error: {}", e)))?;

        if state.should_quit {
            break;
        }

        // Sign-in runs after the "signing in" frame has been drawn
        if let Some(pending) = state.pending_auth.take() {
            state.perform_auth(pending);
            continue;
        }

        if event::poll(Duration::from_millis(100))
            .map_err(|e| Error::Terminal(format!("Poll error: {}", e)))?
        {
            if let Event::Key(key) =
                event::read().map_err(|e| Error::Terminal(format!("Read error: {}", e)))?
            {
                if key.kind == KeyEventKind::Press {
                    if let Some(ev) = handle_key(key, state) {
                        pace_rx = Some(spawn_delay(pace_delay(state, ev), ev));
                    }
                }
            }
        }

        if let Some(rx) = &pace_rx {
            if let Ok(ev) = rx.try_recv() {
                pace_rx = None;
                handle_pace(ev, state);
            }
        }

        // Leaving the quiz cancels any pending advance
        if state.screen != Screen::Quiz {
            pace_rx = None;
        }
    }

    Ok(())
}

fn pace_delay(state: &AppState, ev: PaceEvent) -> Duration {
    match ev {
        PaceEvent::NextQuestion => state.config.advance_delay(),
        PaceEvent::ShowResults => state.config.finish_delay(),
    }
}

fn handle_pace(ev: PaceEvent, state: &mut AppState) {
    if state.screen != Screen::Quiz {
        return;
    }
    match ev {
        PaceEvent::NextQuestion => state.next_question(),
        PaceEvent::ShowResults => state.finish_quiz(),
    }
}

/// Returns the pacing event to schedule, if the key answered a question.
fn handle_key(key: KeyEvent, state: &mut AppState) -> Option<PaceEvent> {
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('q') {
        state.push_dialog(Dialog::ConfirmQuit);
        return None;
    }

    match state.screen {
        Screen::Login => {
            handle_login_key(key, state);
            None
        }
        Screen::Topics => {
            handle_topics_key(key, state);
            None
        }
        Screen::Flashcards => {
            handle_flashcards_key(key, state);
            None
        }
        Screen::Quiz => handle_quiz_key(key, state),
        Screen::Results => {
            handle_results_key(key, state);
            None
        }
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    match state.top_dialog().cloned() {
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.pop_dialog();
                state.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
                state.pop_dialog();
            }
        }
        None => {}
    }
}

fn handle_login_key(key: KeyEvent, state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if state.login_focus.is_text() {
        match key.code {
            KeyCode::Char(c) if !ctrl => {
                login_field_mut(state).push(c);
                return;
            }
            KeyCode::Backspace => {
                login_field_mut(state).pop();
                return;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.login_focus = state.login_focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            // Five steps forward is one step back
            for _ in 0..5 {
                state.login_focus = state.login_focus.next();
            }
        }
        KeyCode::Enter => match state.login_focus {
            LoginFocus::Email | LoginFocus::Password | LoginFocus::Login => {
                state.info("Đang đăng nhập...");
                state.pending_auth = Some(PendingAuth::Login);
            }
            LoginFocus::Name | LoginFocus::Signup => {
                state.info("Đang tạo tài khoản...");
                state.pending_auth = Some(PendingAuth::Signup);
            }
            LoginFocus::Google => {
                state.info("Đang đăng nhập với Google...");
                state.pending_auth = Some(PendingAuth::Google);
            }
        },
        KeyCode::Esc => {
            state.push_dialog(Dialog::ConfirmQuit);
        }
        _ => {}
    }
}

fn login_field_mut(state: &mut AppState) -> &mut String {
    match state.login_focus {
        LoginFocus::Password => &mut state.login_password,
        LoginFocus::Name => &mut state.login_name,
        _ => &mut state.login_email,
    }
}

fn handle_topics_key(key: KeyEvent, state: &mut AppState) {
    let count = state.deck.topics.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.topic_cursor = state.topic_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.topic_cursor + 1 < count {
                state.topic_cursor += 1;
            }
        }
        KeyCode::Enter => {
            state.open_topic(state.topic_cursor);
        }
        KeyCode::Char('t') => {
            if state.open_topic(state.topic_cursor) {
                state.start_quiz();
            }
        }
        KeyCode::Char('L') => state.logout(),
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Char('q') | KeyCode::Esc => state.push_dialog(Dialog::ConfirmQuit),
        _ => {}
    }
}

fn handle_flashcards_key(key: KeyEvent, state: &mut AppState) {
    let reviewing = state.cards.in_review();
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            if !state.cards.is_revealed() {
                state.cards.reveal();
            } else if reviewing {
                state.review_next();
            } else {
                state.cards.next();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if reviewing {
                state.review_next();
            } else {
                state.cards.next();
            }
        }
        KeyCode::Left | KeyCode::Char('h') if !reviewing => state.cards.previous(),
        KeyCode::Home | KeyCode::Char('0') if !reviewing => state.cards.reset(),
        KeyCode::Char('s') => state.toggle_saved(),
        KeyCode::Char('m') => state.toggle_mastered(),
        KeyCode::Char('p') => {
            if let Some(word) = state.current_word().map(|w| w.word.clone()) {
                state.speak(&word);
            }
        }
        KeyCode::Char('r') => {
            if reviewing {
                state.end_review();
            } else {
                state.start_review();
            }
        }
        KeyCode::Char('t') => {
            state.start_quiz();
        }
        KeyCode::Char('?') => state.push_dialog(Dialog::Help),
        KeyCode::Esc | KeyCode::Backspace => state.show_topics(),
        _ => {}
    }
}

fn handle_quiz_key(key: KeyEvent, state: &mut AppState) -> Option<PaceEvent> {
    if key.code == KeyCode::Esc {
        state.back_to_flashcards();
        return None;
    }
    if state.awaiting_next() {
        return None;
    }

    let outcome = match state.input_mode {
        InputMode::TextInput => match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.text_input.push(c);
                None
            }
            KeyCode::Backspace => {
                state.text_input.pop();
                None
            }
            KeyCode::Enter => state.answer_text(),
            _ => None,
        },
        InputMode::ChoiceSelect => {
            let options = state
                .quiz
                .as_ref()
                .and_then(|q| q.current_question())
                .map(|q| q.options().len())
                .unwrap_or(0);
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    state.choice_cursor = state.choice_cursor.saturating_sub(1);
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if state.choice_cursor + 1 < options {
                        state.choice_cursor += 1;
                    }
                    None
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let idx = (c as usize) - ('1' as usize);
                    state.answer_choice(idx)
                }
                KeyCode::Enter => state.answer_choice(state.choice_cursor),
                KeyCode::Char('p') => {
                    let audio = state
                        .quiz
                        .as_ref()
                        .and_then(|q| q.current_question())
                        .and_then(|q| q.audio_text().map(|a| a.to_string()));
                    if let Some(text) = audio {
                        state.speak(&text);
                    }
                    None
                }
                _ => None,
            }
        }
        InputMode::Navigation | InputMode::LoginInput => None,
    }?;

    Some(if outcome.is_last {
        PaceEvent::ShowResults
    } else {
        PaceEvent::NextQuestion
    })
}

fn handle_results_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('r') => state.restart_quiz(),
        KeyCode::Char('b') | KeyCode::Enter => state.back_to_flashcards(),
        KeyCode::Esc => state.show_topics(),
        _ => {}
    }
}
