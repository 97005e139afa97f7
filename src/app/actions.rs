use super::*;
use crate::error::QuizError;
use crate::model::Outcome;
use crate::timer::TimerEvent;
use std::time::Instant;

impl QuizApp {
    /// Pulsación sobre una respuesta. Si es correcta programa el avance.
    pub fn select_answer(&mut self, answer: &str, now: Instant) -> Option<Outcome> {
        match self.engine.submit_answer(answer) {
            Ok(Outcome::Correct) => {
                self.timer.schedule(now, self.engine.generation());
                self.message.clear();
                Some(Outcome::Correct)
            }
            Ok(Outcome::Incorrect) => {
                self.message.clear();
                Some(Outcome::Incorrect)
            }
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    /// Se llama en cada frame: aplica el avance diferido si ya venció
    pub fn tick(&mut self, now: Instant) {
        match self.timer.poll(now, &mut self.engine) {
            Ok(TimerEvent::Advanced) => self.sync_state(),
            Ok(TimerEvent::Idle | TimerEvent::Discarded) => {}
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, e: QuizError) {
        log::warn!("Quiz action rejected: {e}");
        self.message = format!("⚠ {e}");
    }
}
