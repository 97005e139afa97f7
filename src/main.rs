use quiz_app::QuizApp;
use quiz_app::config::QuizConfig;
use quiz_app::data::load_questions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let config = QuizConfig::load()?;
    let questions = load_questions(config.questions_path.as_deref())?;
    log::info!("Question bank ready: {} questions", questions.len());

    let title = config.title.clone();
    let app = QuizApp::new(&config, questions);

    let options = eframe::NativeOptions::default();
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
