use super::*;
use std::time::{Duration, Instant};

impl QuizApp {
    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question()
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.engine.state().selected_answer.as_deref()
    }

    pub fn is_selected(&self, answer: &str) -> bool {
        self.selected_answer() == Some(answer)
    }

    /// Indicador transitorio "Correct!" mientras hay un avance pendiente
    pub fn show_correct(&self) -> bool {
        self.timer.is_pending()
    }

    /// (número 1-based, total) para la cabecera
    pub fn position(&self) -> (usize, usize) {
        (
            self.engine.state().current_question_index + 1,
            self.engine.question_count(),
        )
    }

    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }
}
