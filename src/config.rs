use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Variable de entorno con la ruta del fichero de configuración YAML
pub const CONFIG_ENV: &str = "QUIZ_APP_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    pub title: String,
    pub advance_delay_ms: u64,
    /// Banco de preguntas externo; si falta se usa el embebido
    pub questions_path: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: "Quiz App".to_owned(),
            advance_delay_ms: 1000,
            questions_path: None,
        }
    }
}

impl QuizConfig {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, QuizError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, QuizError> {
        let content = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&content)?;

        // Rutas relativas al directorio del fichero de configuración
        if let (Some(q), Some(dir)) = (config.questions_path.as_ref(), path.parent()) {
            if q.is_relative() {
                config.questions_path = Some(dir.join(q));
            }
        }
        Ok(config)
    }

    /// Lee `QUIZ_APP_CONFIG` si existe; si no, valores por defecto
    pub fn load() -> Result<Self, QuizError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                log::info!("Loading configuration from {}", path.display());
                Self::from_path(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one_second_delay_and_embedded_bank() {
        let config = QuizConfig::default();
        assert_eq!(config.title, "Quiz App");
        assert_eq!(config.advance_delay(), Duration::from_secs(1));
        assert!(config.questions_path.is_none());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = QuizConfig::from_yaml("advance_delay_ms: 250\n").expect("config ok");
        assert_eq!(config.advance_delay(), Duration::from_millis(250));
        assert_eq!(config.title, "Quiz App");
    }

    #[test]
    fn relative_questions_path_is_resolved_against_config_dir() {
        let dir = std::env::temp_dir().join(format!("quiz_app_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let cfg_path = dir.join("quiz.yaml");
        std::fs::write(&cfg_path, "questions_path: bank.yaml\n").unwrap();

        let config = QuizConfig::from_path(&cfg_path).expect("config ok");
        assert_eq!(config.questions_path, Some(dir.join("bank.yaml")));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
