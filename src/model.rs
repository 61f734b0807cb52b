use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl VocabularyEntry {
    pub fn new(word: &str, translation: &str, example: Option<&str>) -> Self {
        Self {
            word: word.to_string(),
            translation: translation.to_string(),
            example: example.map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub words: Vec<VocabularyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    pub topics: Vec<Topic>,
    #[serde(skip)]
    pub deck_hash: String,
}

impl Deck {
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Vocabulary")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Sub-type tag plus source index, e.g. `mc-2`.
    pub id: String,
    pub prompt: String,
    pub correct_answer: String,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice(Vec<String>),
    FillBlank,
    ListenChoose {
        options: Vec<String>,
        audio_text: String,
    },
}

impl Question {
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice(options) => options,
            QuestionKind::ListenChoose { options, .. } => options,
            QuestionKind::FillBlank => &[],
        }
    }

    pub fn audio_text(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::ListenChoose { audio_text, .. } => Some(audio_text),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Case-insensitive comparison; diacritics are significant.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer.to_lowercase() == answer.to_lowercase()
    }
}

impl QuestionKind {
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice(_) => "mc",
            QuestionKind::FillBlank => "fb",
            QuestionKind::ListenChoose { .. } => "lc",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice(_) => "multiple_choice_translation",
            QuestionKind::FillBlank => "fill_blank",
            QuestionKind::ListenChoose { .. } => "listen_choose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn new(total: usize) -> Self {
        Self { correct: 0, total }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    pub fn grade(&self) -> Grade {
        let ratio = self.ratio();
        if ratio >= 0.8 {
            Grade::Excellent
        } else if ratio >= 0.5 {
            Grade::Good
        } else {
            Grade::NeedsWork
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    NeedsWork,
}

impl Grade {
    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Tuyệt vời! Bạn đã nắm vững chủ đề này.",
            Grade::Good => "Khá tốt! Hãy tiếp tục luyện tập thêm.",
            Grade::NeedsWork => "Cần cố gắng hơn! Hãy quay lại học lại chủ đề này.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
