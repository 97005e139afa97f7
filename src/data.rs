// src/data.rs

use std::path::Path;

use crate::error::QuizError;
use crate::model::Question;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<Vec<Question>, QuizError> {
    let file_content = include_str!("data/quiz_questions.yaml");
    parse_questions(file_content)
}

/// Carga el banco de preguntas desde un fichero YAML externo
pub fn read_questions_from_path(path: &Path) -> Result<Vec<Question>, QuizError> {
    let file_content = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_questions(&file_content)?;
    log::info!(
        "Loaded {} questions from {}",
        questions.len(),
        path.display()
    );
    Ok(questions)
}

/// Usa el fichero si hay ruta, si no el banco embebido.
pub fn load_questions(path: Option<&Path>) -> Result<Vec<Question>, QuizError> {
    match path {
        Some(p) => read_questions_from_path(p),
        None => read_questions_embedded(),
    }
}

pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, QuizError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    for (index, q) in questions.iter().enumerate() {
        validate_question(index, q)?;
    }
    Ok(questions)
}

fn validate_question(index: usize, q: &Question) -> Result<(), QuizError> {
    if q.answers.len() < 2 {
        return Err(QuizError::InvalidQuestion {
            index,
            reason: format!("needs at least 2 answers, got {}", q.answers.len()),
        });
    }
    if !q.answers.iter().any(|a| a == &q.correct_answer) {
        return Err(QuizError::InvalidQuestion {
            index,
            reason: format!("correct answer {:?} is not among the answers", q.correct_answer),
        });
    }
    Ok(())
}
