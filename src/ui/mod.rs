mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use std::time::Instant;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        self.tick(now);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Start => views::start::ui_start(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Completion => views::completion::ui_completion(self, ctx),
        }

        // Sin eventos de entrada egui no repinta: pedimos frame al vencer el avance
        if let Some(wait) = self.repaint_after(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
