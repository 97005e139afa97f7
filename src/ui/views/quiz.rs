use crate::QuizApp;
use crate::ui::helpers::answer_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};
use std::time::Instant;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 560.0, |ui| {
        let Some(question) = app.current_question().cloned() else {
            // Banco vacío: solo el mensaje de error
            ui.heading(app.title.as_str());
            ui.add_space(10.0);
            ui.label(RichText::new(&app.message).color(Color32::YELLOW));
            return;
        };

        let (n, total) = app.position();
        ui.label(format!("Question {n}/{total}"));
        ui.add_space(6.0);
        ui.heading(RichText::new(&question.text).size(28.0));
        ui.add_space(14.0);

        // Mientras se muestra "Correct!" no se aceptan más respuestas
        let enabled = !app.show_correct();
        let btn_w = (ui.available_width() * 0.8).clamp(160.0, 400.0);
        for answer in &question.answers {
            if answer_button(ui, answer, app.is_selected(answer), btn_w, enabled) {
                app.select_answer(answer, Instant::now());
            }
            ui.add_space(2.0);
        }

        if app.show_correct() {
            ui.add_space(10.0);
            ui.label(RichText::new("Correct!").heading().color(Color32::GREEN));
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
