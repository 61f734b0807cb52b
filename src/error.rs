use thiserror::Error;

/// Failures raised by quiz generation and answer submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
    #[error("question {0:?} does not belong to this quiz")]
    InvalidQuestion(String),
    #[error("a quiz needs at least one question")]
    InvalidQuestionLimit,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{context}: {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid deck: {0}")]
    Deck(String),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error("terminal: {0}")]
    Terminal(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    pub fn yaml(context: impl Into<String>, source: serde_yaml::Error) -> Self {
        Error::Yaml {
            context: context.into(),
            source,
        }
    }
}
