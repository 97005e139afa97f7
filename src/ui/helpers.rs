// src/ui/helpers.rs
use egui::{Button, Color32, CornerRadius, RichText, Ui, Vec2};

pub const BUTTON_HEIGHT: f32 = 40.0;

/// Botón de acción con color de fondo fijo (Restart, Finish, Start)
pub fn colored_button(ui: &mut Ui, label: &str, fill: Color32, width: f32) -> bool {
    ui.add(
        Button::new(RichText::new(label).color(Color32::WHITE))
            .fill(fill)
            .corner_radius(CornerRadius::same(10))
            .min_size(Vec2::new(width, BUTTON_HEIGHT)),
    )
    .clicked()
}

/// Botón de respuesta: azul si es la seleccionada, gris si no.
/// Devuelve `true` si se pulsó.
pub fn answer_button(ui: &mut Ui, label: &str, selected: bool, width: f32, enabled: bool) -> bool {
    let fill = if selected {
        Color32::from_rgb(0, 122, 255)
    } else {
        Color32::GRAY
    };
    ui.add_enabled(
        enabled,
        Button::new(RichText::new(label).color(Color32::WHITE))
            .fill(fill)
            .corner_radius(CornerRadius::same(10))
            .min_size(Vec2::new(width, BUTTON_HEIGHT)),
    )
    .clicked()
}
