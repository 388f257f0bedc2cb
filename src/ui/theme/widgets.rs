//! Small painted widgets shared across panels.

use eframe::egui::{self, Align2, Color32, FontId};

/// Render a circular avatar: a filled disc with the first character of
/// `label` centered in white. Used for the assistant badge in the chat
/// panel and the brand mark in the sidebar.
pub fn render_avatar(
    ui: &mut egui::Ui,
    label: &str,
    size: f32,
    fill: Color32,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    let painter = ui.painter();

    // Subtle drop shadow for depth
    painter.circle_filled(
        rect.center() + egui::vec2(0.0, 1.5),
        size / 2.0,
        Color32::from_black_alpha(30),
    );
    painter.circle_filled(rect.center(), size / 2.0, fill);

    let initial = label.chars().next().unwrap_or('?').to_uppercase().to_string();
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(size * 0.5),
        Color32::WHITE,
    );

    response
}
