use super::*;

impl QuizApp {
    /// "Restart Quiz": vuelve a la primera pregunta. Un avance pendiente
    /// queda cancelado.
    pub fn restart_quiz(&mut self) {
        self.engine.restart();
        self.timer.cancel();
        self.state = AppState::Quiz;
        self.message.clear();
    }
}
