use crate::QuizApp;
use crate::ui::helpers::colored_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context};

pub fn ui_completion(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.heading("Quiz Completed!");
        ui.add_space(18.0);

        if colored_button(ui, "Restart Quiz", Color32::from_rgb(0, 122, 255), 200.0) {
            app.restart_quiz();
        }
        ui.add_space(10.0);
        if colored_button(ui, "Finish", Color32::DARK_RED, 200.0) {
            app.finish_quiz();
        }
    });
}
