use crate::error::{InvalidState, QuizError};
use crate::model::{Outcome, Phase, Question, QuizState};

/// Dueño del estado de progreso. Las únicas mutaciones legales pasan por aquí.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>) -> Self {
        if questions.is_empty() {
            log::warn!("QuizEngine created with an empty question bank");
        }
        Self {
            questions,
            state: QuizState::default(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// `None` si el banco está vacío o el quiz ya terminó
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.is_complete {
            return None;
        }
        self.questions.get(self.state.current_question_index)
    }

    /// Registra la respuesta elegida. Nunca avanza por sí mismo.
    pub fn submit_answer(&mut self, answer: &str) -> Result<Outcome, QuizError> {
        self.ensure_in_progress()?;
        let question = self
            .questions
            .get(self.state.current_question_index)
            .ok_or(InvalidState::EmptyQuestionBank)?;

        let outcome = if question.is_correct(answer) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.state.selected_answer = Some(answer.to_owned());

        log::debug!(
            "Answer {:?} for question {} -> {:?}",
            answer,
            self.state.current_question_index,
            outcome
        );
        Ok(outcome)
    }

    pub fn advance(&mut self) -> Result<(), QuizError> {
        self.ensure_in_progress()?;

        if self.state.current_question_index + 1 < self.questions.len() {
            self.state.current_question_index += 1;
            log::info!(
                "Advanced to question {}/{}",
                self.state.current_question_index + 1,
                self.questions.len()
            );
        } else {
            self.state.is_complete = true;
            log::info!("Quiz completed");
        }
        self.state.selected_answer = None;
        self.state.generation += 1;
        Ok(())
    }

    pub fn restart(&mut self) {
        self.state.current_question_index = 0;
        self.state.selected_answer = None;
        self.state.is_complete = false;
        self.state.generation += 1;
        log::info!("Quiz restarted");
    }

    /// Sale del ámbito del quiz. No toca índice ni selección: el llamador
    /// decide si reutiliza el motor (p. ej. con `restart`).
    pub fn finish(&mut self) {
        self.state.is_complete = false;
        self.state.generation += 1;
        log::info!("Quiz finished");
    }

    fn ensure_in_progress(&self) -> Result<(), InvalidState> {
        if self.questions.is_empty() {
            return Err(InvalidState::EmptyQuestionBank);
        }
        if self.state.is_complete {
            return Err(InvalidState::QuizComplete);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_questions() -> Vec<Question> {
        vec![
            Question::new(
                "What is the capital of Turkey",
                &["Istanbul", "Madrid", "Ankara", "Rome"],
                "Ankara",
            ),
            Question::new(
                "Which club is bigger in Turkish Super Leauge?",
                &["Adanaspor", "Besiktas", "Fenerbahce", "Galatasaray"],
                "Galatasaray",
            ),
        ]
    }

    fn three_questions() -> Vec<Question> {
        let mut qs = sample_questions();
        qs.push(Question::new("1 + 1", &["1", "2"], "2"));
        qs
    }

    #[test]
    fn starts_in_progress_at_first_question() {
        let engine = QuizEngine::new(sample_questions());
        assert_eq!(engine.state().current_question_index, 0);
        assert_eq!(engine.state().selected_answer, None);
        assert!(!engine.is_complete());
        assert_eq!(engine.phase(), Phase::InProgress);
        assert_eq!(
            engine.current_question().map(|q| q.text.as_str()),
            Some("What is the capital of Turkey")
        );
    }

    #[test]
    fn advance_moves_to_next_index_and_clears_selection() {
        let mut engine = QuizEngine::new(three_questions());
        for i in 0..2 {
            engine.submit_answer("whatever").unwrap();
            engine.advance().unwrap();
            assert_eq!(engine.state().current_question_index, i + 1);
            assert_eq!(engine.state().selected_answer, None);
            assert!(!engine.is_complete());
        }
    }

    #[test]
    fn advance_at_last_index_completes() {
        let mut engine = QuizEngine::new(sample_questions());
        engine.advance().unwrap();
        engine.submit_answer("Besiktas").unwrap();
        engine.advance().unwrap();
        assert!(engine.is_complete());
        assert_eq!(engine.phase(), Phase::Complete);
        assert_eq!(engine.state().selected_answer, None);
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn submit_answer_reports_outcome_and_records_selection() {
        let mut engine = QuizEngine::new(sample_questions());
        assert_eq!(engine.submit_answer("Madrid").unwrap(), Outcome::Incorrect);
        assert_eq!(engine.state().selected_answer.as_deref(), Some("Madrid"));
        assert_eq!(engine.submit_answer("Ankara").unwrap(), Outcome::Correct);
        assert_eq!(engine.state().selected_answer.as_deref(), Some("Ankara"));
        assert_eq!(engine.state().current_question_index, 0);
    }

    #[test]
    fn unknown_answer_is_recorded_as_incorrect() {
        let mut engine = QuizEngine::new(sample_questions());
        assert_eq!(engine.submit_answer("Paris").unwrap(), Outcome::Incorrect);
        assert_eq!(engine.state().selected_answer.as_deref(), Some("Paris"));
    }

    #[test]
    fn restart_resets_from_any_state_and_is_idempotent() {
        let mut engine = QuizEngine::new(sample_questions());
        engine.submit_answer("Ankara").unwrap();
        engine.advance().unwrap();
        engine.submit_answer("Fenerbahce").unwrap();

        engine.restart();
        let once = engine.state().clone();
        assert_eq!(once.current_question_index, 0);
        assert_eq!(once.selected_answer, None);
        assert!(!once.is_complete);

        engine.restart();
        let twice = engine.state();
        assert_eq!(twice.current_question_index, once.current_question_index);
        assert_eq!(twice.selected_answer, once.selected_answer);
        assert_eq!(twice.is_complete, once.is_complete);
    }

    #[test]
    fn full_two_question_scenario() {
        let mut engine = QuizEngine::new(sample_questions());

        assert_eq!(engine.submit_answer("Ankara").unwrap(), Outcome::Correct);
        assert_eq!(engine.state().selected_answer.as_deref(), Some("Ankara"));
        engine.advance().unwrap();
        assert_eq!(engine.state().current_question_index, 1);
        assert_eq!(engine.state().selected_answer, None);

        assert_eq!(
            engine.submit_answer("Fenerbahce").unwrap(),
            Outcome::Incorrect
        );
        assert_eq!(engine.state().selected_answer.as_deref(), Some("Fenerbahce"));
        assert_eq!(engine.state().current_question_index, 1);

        assert_eq!(
            engine.submit_answer("Galatasaray").unwrap(),
            Outcome::Correct
        );
        engine.advance().unwrap();
        assert!(engine.is_complete());
    }

    #[test]
    fn restart_from_completion_allows_answering_again() {
        let mut engine = QuizEngine::new(sample_questions());
        engine.advance().unwrap();
        engine.advance().unwrap();
        assert!(engine.is_complete());

        engine.restart();
        assert_eq!(engine.state().current_question_index, 0);
        assert!(!engine.is_complete());
        assert_eq!(engine.submit_answer("Ankara").unwrap(), Outcome::Correct);
    }

    #[test]
    fn transitions_fail_on_empty_bank() {
        let mut engine = QuizEngine::new(Vec::new());
        let err = engine.submit_answer("Ankara").unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidState(InvalidState::EmptyQuestionBank)
        ));
        let err = engine.advance().unwrap_err();
        assert!(err.is_invalid_state());
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn submit_and_advance_fail_once_complete() {
        let mut engine = QuizEngine::new(sample_questions());
        engine.advance().unwrap();
        engine.advance().unwrap();

        let err = engine.submit_answer("Ankara").unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidState(InvalidState::QuizComplete)
        ));
        assert!(engine.advance().is_err());
        assert_eq!(engine.state().selected_answer, None);
    }

    #[test]
    fn finish_clears_completion_without_resetting_position() {
        let mut engine = QuizEngine::new(sample_questions());
        engine.advance().unwrap();
        engine.advance().unwrap();
        let before = engine.generation();

        engine.finish();
        assert!(!engine.is_complete());
        assert_eq!(engine.state().current_question_index, 1);
        assert!(engine.generation() > before);
    }

    #[test]
    fn transitions_bump_generation_but_answers_do_not() {
        let mut engine = QuizEngine::new(sample_questions());
        let g0 = engine.generation();
        engine.submit_answer("Ankara").unwrap();
        assert_eq!(engine.generation(), g0);
        engine.advance().unwrap();
        assert_eq!(engine.generation(), g0 + 1);
        engine.restart();
        assert_eq!(engine.generation(), g0 + 2);
    }
}
