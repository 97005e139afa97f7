use crate::QuizApp;
use crate::ui::helpers::colored_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 200.0, 480.0, |ui| {
        ui.heading(format!("Welcome to the {}", app.title));
        ui.add_space(18.0);

        if colored_button(ui, "Start Quiz", Color32::DARK_GREEN, 200.0) {
            app.start_quiz();
        }
    });
}
