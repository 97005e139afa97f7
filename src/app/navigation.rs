use super::*;

impl QuizApp {
    /// "Start Quiz" desde la pantalla de bienvenida: siempre desde la primera pregunta
    pub fn start_quiz(&mut self) {
        self.engine.restart();
        self.timer.cancel();
        self.state = AppState::Quiz;
        self.message.clear();
    }

    /// "Finish" en la pantalla final: sale del quiz y vuelve al inicio
    pub fn finish_quiz(&mut self) {
        self.engine.finish();
        self.timer.cancel();
        self.state = AppState::Start;
        self.message.clear();
    }

    /// Ajusta la pantalla al estado del motor
    pub(crate) fn sync_state(&mut self) {
        if self.state == AppState::Quiz && self.engine.is_complete() {
            self.state = AppState::Completion;
        }
    }
}
