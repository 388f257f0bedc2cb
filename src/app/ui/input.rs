use eframe::egui::{self, Margin, RichText};

use crate::app::core::NovaApp;
use crate::ui::theme::NovaTheme;

impl NovaApp {
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context, theme: &NovaTheme) {
        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface)
                    .inner_margin(Margin::symmetric(12, 10)),
            )
            .show(ctx, |ui| {
                let mut send_requested = false;

                ui.horizontal(|ui| {
                    let input_frame = egui::Frame::new()
                        .fill(theme.surface_raised)
                        .stroke(egui::Stroke::new(1.0, theme.border))
                        .corner_radius(16.0)
                        .inner_margin(Margin::symmetric(12, 6));
                    input_frame.show(ui, |ui| {
                        let edit = egui::TextEdit::multiline(&mut self.input.message_input)
                            .desired_rows(1)
                            .desired_width(ui.available_width() - 52.0)
                            .frame(false)
                            .hint_text("Envie uma mensagem...");
                        let response = ui.add(edit);

                        if response.has_focus() {
                            ui.input(|i| {
                                if i.key_pressed(egui::Key::Enter) && !i.modifiers.shift {
                                    send_requested = true;
                                }
                                if i.key_pressed(egui::Key::ArrowUp) {
                                    self.input.history_prev();
                                }
                                if i.key_pressed(egui::Key::ArrowDown) {
                                    self.input.history_next();
                                }
                            });
                        }
                        if send_requested {
                            response.request_focus();
                        }
                    });

                    let send_button = egui::Button::new(
                        RichText::new("➤").size(16.0).color(theme.accent),
                    );
                    if ui
                        .add_enabled(!self.state.awaiting_reply, send_button)
                        .on_hover_text("Enviar mensagem")
                        .clicked()
                    {
                        send_requested = true;
                    }
                });

                if send_requested {
                    self.send_current_message();
                }

                ui.add_space(2.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Nova - Seu assistente FICO Blaze Advisor")
                            .size(10.0)
                            .color(theme.text_muted),
                    );
                });
            });
    }
}
