use std::path::PathBuf;

use thiserror::Error;

/// Motivo por el que una transición no es válida en el estado actual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("no questions are loaded")]
    EmptyQuestionBank,
    #[error("the quiz is already complete")]
    QuizComplete,
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid state: {0}")]
    InvalidState(#[from] InvalidState),

    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("could not parse YAML: {0}")]
    QuestionBank(#[from] serde_yaml::Error),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QuizError {
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, QuizError::InvalidState(_))
    }
}
