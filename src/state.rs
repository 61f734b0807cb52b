use std::path::PathBuf;

use rand::rngs::StdRng;

use crate::auth::{Auth, AuthOutcome};
use crate::config::Config;
use crate::model::{Deck, QuestionKind, Topic, User, VocabularyEntry};
use crate::persist::{self, QuizRecord};
use crate::progress::TopicProgress;
use crate::review::{Flashcards, ReviewStep};
use crate::session::{AnswerOutcome, QuizSession};
use crate::speech::Speaker;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Topics,
    Flashcards,
    Quiz,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    ConfirmQuit,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Navigation,
    ChoiceSelect,
    TextInput,
    LoginInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    Name,
    Login,
    Signup,
    Google,
}

impl LoginFocus {
    pub fn next(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Name,
            LoginFocus::Name => LoginFocus::Login,
            LoginFocus::Login => LoginFocus::Signup,
            LoginFocus::Signup => LoginFocus::Google,
            LoginFocus::Google => LoginFocus::Email,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(
            self,
            LoginFocus::Email | LoginFocus::Password | LoginFocus::Name
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAuth {
    Login,
    Signup,
    Google,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

pub struct AppState {
    pub screen: Screen,
    pub deck: Deck,
    pub config: Config,
    pub state_dir: PathBuf,
    pub store: Box<dyn KeyValueStore>,
    pub speaker: Box<dyn Speaker>,
    pub rng: StdRng,
    pub auth: Auth,
    pub user: Option<User>,
    pub topic_cursor: usize,
    pub topic: Option<usize>,
    pub progress: TopicProgress,
    pub cards: Flashcards,
    pub quiz: Option<QuizSession>,
    pub feedback: Option<AnswerOutcome>,
    pub choice_cursor: usize,
    pub text_input: String,
    pub login_email: String,
    pub login_password: String,
    pub login_name: String,
    pub login_focus: LoginFocus,
    pub pending_auth: Option<PendingAuth>,
    pub input_mode: InputMode,
    pub dialog_stack: Vec<Dialog>,
    pub message: Option<Message>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(
        deck: Deck,
        config: Config,
        state_dir: PathBuf,
        mut store: Box<dyn KeyValueStore>,
        speaker: Box<dyn Speaker>,
        rng: StdRng,
    ) -> Self {
        let auth = Auth::new(config.login_delay(), config.signup_delay());
        let user = auth.current_user(store.as_mut());
        let screen = if user.is_some() {
            Screen::Topics
        } else {
            Screen::Login
        };
        let input_mode = if user.is_some() {
            InputMode::Navigation
        } else {
            InputMode::LoginInput
        };

        Self {
            screen,
            deck,
            config,
            state_dir,
            store,
            speaker,
            rng,
            auth,
            user,
            topic_cursor: 0,
            topic: None,
            progress: TopicProgress::default(),
            cards: Flashcards::default(),
            quiz: None,
            feedback: None,
            choice_cursor: 0,
            text_input: String::new(),
            login_email: String::new(),
            login_password: String::new(),
            login_name: String::new(),
            login_focus: LoginFocus::Email,
            pending_auth: None,
            input_mode,
            dialog_stack: Vec::new(),
            message: None,
            should_quit: false,
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.message = Some(Message {
            text: text.into(),
            kind: MessageKind::Info,
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.message = Some(Message {
            text: text.into(),
            kind: MessageKind::Success,
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.message = Some(Message {
            text: text.into(),
            kind: MessageKind::Error,
        });
    }

    // Authentication

    pub fn perform_auth(&mut self, pending: PendingAuth) {
        let store = self.store.as_mut();
        let result = match pending {
            PendingAuth::Login => self.auth.login(store, &self.login_email, &self.login_password),
            PendingAuth::Signup => self.auth.signup(
                store,
                &self.login_email,
                &self.login_password,
                &self.login_name,
            ),
            PendingAuth::Google => self.auth.login_with_google(store),
        };

        match result {
            Ok(AuthOutcome::Authenticated { user }) => {
                self.success(format!("Xin chào, {}!", user.display_name()));
                self.user = Some(user);
                self.login_password.clear();
                self.show_topics();
            }
            Ok(AuthOutcome::Rejected { reason }) => {
                self.error(format!("Login failed: {}", reason));
            }
            Err(e) => {
                log::error!("sign-in failed: {}", e);
                self.error(format!("Login failed: {}", e));
            }
        }
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.auth.logout(self.store.as_mut()) {
            log::error!("logout failed: {}", e);
        }
        self.user = None;
        self.topic = None;
        self.quiz = None;
        self.screen = Screen::Login;
        self.input_mode = InputMode::LoginInput;
        self.login_focus = LoginFocus::Email;
        self.success("Logged out");
    }

    // Topics and flashcards

    pub fn show_topics(&mut self) {
        self.screen = Screen::Topics;
        self.input_mode = InputMode::Navigation;
        self.quiz = None;
        self.feedback = None;
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        self.topic.and_then(|i| self.deck.topics.get(i))
    }

    pub fn open_topic(&mut self, idx: usize) -> bool {
        let Some(topic) = self.deck.topics.get(idx) else {
            return false;
        };
        self.progress = TopicProgress::load(self.store.as_ref(), &topic.id);
        self.cards = Flashcards::new(topic.words.len());
        self.topic = Some(idx);
        self.topic_cursor = idx;
        self.screen = Screen::Flashcards;
        self.input_mode = InputMode::Navigation;
        log::debug!("opened topic {}", topic.id);
        true
    }

    pub fn open_topic_by_id(&mut self, id: &str) -> bool {
        match self.deck.topics.iter().position(|t| t.id == id) {
            Some(idx) => self.open_topic(idx),
            None => false,
        }
    }

    pub fn current_word(&self) -> Option<&VocabularyEntry> {
        self.current_topic()
            .and_then(|t| t.words.get(self.cards.current()))
    }

    pub fn toggle_saved(&mut self) {
        let Some(word) = self.current_word().map(|w| w.word.clone()) else {
            return;
        };
        if self.progress.toggle_saved(&word) {
            self.success(format!("Đã lưu \"{}\" vào danh sách từ mục", word));
        } else {
            self.info(format!("Đã xóa \"{}\" khỏi danh sách từ đã lưu", word));
        }
        self.save_progress();
    }

    pub fn toggle_mastered(&mut self) {
        let Some(word) = self.current_word().map(|w| w.word.clone()) else {
            return;
        };
        if self.progress.toggle_mastered(&word) {
            self.success(format!("Đã đánh dấu \"{}\" là đã thuộc", word));
        } else {
            self.info(format!("Đã xóa \"{}\" khỏi danh sách từ đã thuộc", word));
        }
        self.save_progress();
    }

    fn save_progress(&mut self) {
        if let Err(e) = self.progress.save(self.store.as_mut()) {
            log::error!("cannot save progress: {}", e);
            self.error(format!("Cannot save progress: {}", e));
        }
    }

    pub fn start_review(&mut self) {
        let Some(topic) = self.current_topic() else {
            return;
        };
        let unmastered: Vec<usize> = topic
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| !self.progress.is_mastered(&w.word))
            .map(|(i, _)| i)
            .collect();

        match self.cards.start_review(unmastered, &mut self.rng) {
            Ok(n) => self.success(format!("Bắt đầu ôn tập {} từ", n)),
            Err(_) => self.info("Bạn đã thuộc tất cả các từ trong chủ đề này!"),
        }
    }

    pub fn review_next(&mut self) {
        if self.cards.review_next() == ReviewStep::Finished {
            self.success("Bạn đã hoàn thành phiên ôn tập!");
        }
    }

    pub fn end_review(&mut self) {
        self.cards.end_review();
        self.info("Đã kết thúc chế độ ôn tập");
    }

    pub fn speak(&mut self, text: &str) {
        if let Err(e) = self.speaker.speak(text) {
            log::warn!("speech failed: {}", e);
            self.error(format!("Audio unavailable: {}", e));
        }
    }

    // Quiz

    /// Generates a quiz for the open topic. On failure the learner is sent
    /// back to the topic list.
    pub fn start_quiz(&mut self) -> bool {
        let Some(topic) = self.topic.and_then(|i| self.deck.topics.get(i)) else {
            return false;
        };
        match QuizSession::start(&topic.words, self.config.max_questions, &mut self.rng) {
            Ok(session) => {
                log::info!(
                    "quiz started for {} with {} questions",
                    topic.id,
                    session.len()
                );
                self.quiz = Some(session);
                self.screen = Screen::Quiz;
                self.reset_answer_input();
                true
            }
            Err(e) => {
                log::error!("cannot build quiz for {}: {}", topic.id, e);
                self.error(format!("Cannot start quiz: {}", e));
                self.show_topics();
                false
            }
        }
    }

    pub fn awaiting_next(&self) -> bool {
        self.feedback.is_some()
    }

    /// Submits `answer` for the current question. Returns `None` when the
    /// question was already answered or there is no quiz.
    pub fn answer_current(&mut self, answer: &str) -> Option<AnswerOutcome> {
        if self.feedback.is_some() {
            return None;
        }
        let quiz = self.quiz.as_mut()?;
        let id = quiz.current_question()?.id.clone();
        if quiz.answer_for(&id).is_some() {
            return None;
        }
        match quiz.submit_answer(&id, answer) {
            Ok(outcome) => {
                self.feedback = Some(outcome);
                self.input_mode = InputMode::Navigation;
                if outcome.is_correct {
                    self.success("Chính xác!");
                } else {
                    self.error("Chưa đúng. Hãy xem lại đáp án.");
                }
                Some(outcome)
            }
            Err(e) => {
                log::error!("answer rejected: {}", e);
                None
            }
        }
    }

    pub fn answer_choice(&mut self, idx: usize) -> Option<AnswerOutcome> {
        let option = self
            .quiz
            .as_ref()?
            .current_question()?
            .options()
            .get(idx)?
            .clone();
        self.choice_cursor = idx;
        self.answer_current(&option)
    }

    pub fn answer_text(&mut self) -> Option<AnswerOutcome> {
        let text = self.text_input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.answer_current(&text)
    }

    pub fn next_question(&mut self) {
        if let Some(quiz) = self.quiz.as_mut() {
            quiz.advance();
        }
        self.reset_answer_input();
    }

    pub fn finish_quiz(&mut self) {
        self.feedback = None;
        self.screen = Screen::Results;
        self.input_mode = InputMode::Navigation;

        let (Some(quiz), Some(topic)) = (self.quiz.as_ref(), self.current_topic()) else {
            return;
        };
        let record = QuizRecord::from_session(&topic.id, &self.deck.deck_hash, quiz);
        if let Err(e) = persist::append_result(&self.state_dir, record) {
            log::error!("cannot record result: {}", e);
            self.error(format!("Cannot save result: {}", e));
        }
    }

    pub fn restart_quiz(&mut self) {
        let Some(quiz) = self.quiz.as_ref() else {
            return;
        };
        let restarted = quiz.restart(&mut self.rng);
        self.quiz = Some(restarted);
        self.screen = Screen::Quiz;
        self.reset_answer_input();
        self.info("Bắt đầu bài kiểm tra mới.");
    }

    pub fn back_to_flashcards(&mut self) {
        self.quiz = None;
        self.feedback = None;
        self.screen = Screen::Flashcards;
        self.input_mode = InputMode::Navigation;
    }

    fn reset_answer_input(&mut self) {
        self.feedback = None;
        self.choice_cursor = 0;
        self.text_input.clear();
        self.update_input_mode();
    }

    fn update_input_mode(&mut self) {
        let Some(question) = self.quiz.as_ref().and_then(|q| q.current_question()) else {
            return;
        };
        self.input_mode = match &question.kind {
            QuestionKind::MultipleChoice(_) | QuestionKind::ListenChoose { .. } => {
                InputMode::ChoiceSelect
            }
            QuestionKind::FillBlank => InputMode::TextInput,
        };
    }

    // Dialogs

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}
