pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod timer;
pub mod ui;

pub use app::QuizApp;
pub use engine::QuizEngine;
pub use error::QuizError;
