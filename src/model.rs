use serde::{Deserialize, Serialize};

/// Una pregunta de opción múltiple. Se construye al arrancar y no cambia.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new(text: &str, answers: &[&str], correct_answer: &str) -> Self {
        Self {
            text: text.to_owned(),
            answers: answers.iter().map(|a| (*a).to_owned()).collect(),
            correct_answer: correct_answer.to_owned(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Resultado de enviar una respuesta
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Complete,
}

/// Estado de progreso del quiz, propiedad exclusiva de `QuizEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QuizState {
    pub current_question_index: usize,
    pub selected_answer: Option<String>,
    pub is_complete: bool,
    // Se incrementa en cada transición que invalida un avance programado
    pub generation: u64,
}

impl QuizState {
    pub fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }
}

/// Pantallas de la aplicación
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Start,
    Quiz,
    Completion,
}
