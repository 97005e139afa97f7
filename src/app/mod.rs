use crate::config::QuizConfig;
use crate::engine::QuizEngine;
use crate::model::{AppState, Question};
use crate::timer::AdvanceTimer;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;

/// Estado de la aplicación: motor del quiz, avance diferido y pantalla actual.
/// La capa de UI solo lee de aquí y llama a las acciones.
pub struct QuizApp {
    pub engine: QuizEngine,
    pub timer: AdvanceTimer,
    pub state: AppState,
    pub title: String,
    pub message: String,
}

impl QuizApp {
    pub fn new(config: &QuizConfig, questions: Vec<Question>) -> Self {
        log::info!(
            "Starting quiz with {} questions (advance delay {:?})",
            questions.len(),
            config.advance_delay()
        );
        Self {
            engine: QuizEngine::new(questions),
            timer: AdvanceTimer::new(config.advance_delay()),
            state: AppState::Start,
            title: config.title.clone(),
            message: String::new(),
        }
    }
}
