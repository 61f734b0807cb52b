pub mod dialog;
pub mod flashcard;
pub mod keybar;
pub mod layout;
pub mod login;
pub mod question;
pub mod result;
pub mod statusbar;
pub mod titlebar;
pub mod topics;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);

    match state.screen {
        Screen::Login => {
            login::draw_login(f, layout.main, state);
        }
        Screen::Topics => {
            topics::draw_topics(f, layout.main, state);
        }
        Screen::Flashcards => {
            flashcard::draw_flashcard(f, layout.main, state);
        }
        Screen::Quiz => {
            question::draw_question(f, layout.main, state);
        }
        Screen::Results => {
            result::draw_results(f, layout.main, state);
        }
    }

    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
