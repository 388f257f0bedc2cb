use std::time::Instant;

use eframe::egui::{self, Margin, RichText};

use crate::app::core::NovaApp;
use crate::protocol::BackendAction;
use crate::ui::theme::{self, NovaTheme};

impl NovaApp {
    pub(in crate::app) fn render_sidebar_panel(&mut self, ctx: &egui::Context, theme: &NovaTheme) {
        let mut response = crate::ui::SidebarResponse::default();
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(220.0)
            .frame(
                egui::Frame::new()
                    .fill(theme.surface)
                    .inner_margin(Margin::symmetric(8, 8)),
            )
            .show(ctx, |ui| {
                response = crate::ui::render_sidebar(ui, &self.state, &mut self.settings, theme);
            });

        if response.new_conversation {
            self.state.new_conversation();
            self.persist_settings();
        }
        if response.api_url_changed && self.settings.api_url != self.applied_api_url {
            self.applied_api_url = self.settings.api_url.clone();
            let _ = self
                .action_tx
                .send(BackendAction::SetApiUrl(self.settings.api_url.clone()));
            self.state
                .status_messages
                .push(("URL da API atualizada".into(), Instant::now()));
            self.persist_settings();
        }
        if response.theme_changed {
            ctx.set_visuals(if self.settings.theme == "light" {
                egui::Visuals::light()
            } else {
                egui::Visuals::dark()
            });
            self.persist_settings();
        }
    }

    pub(in crate::app) fn render_central_panel(&self, ctx: &egui::Context, theme: &NovaTheme) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme.background)
                    .inner_margin(Margin::symmetric(0, 0)),
            )
            .show(ctx, |ui| {
                // Chat header
                egui::Frame::new()
                    .fill(theme.surface)
                    .inner_margin(Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            theme::render_avatar(ui, "Nova", 26.0, theme.accent);
                            ui.add_space(6.0);
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new("Nova Assistant")
                                        .size(14.0)
                                        .strong()
                                        .color(theme.text_primary),
                                );
                                ui.label(
                                    RichText::new("Assistente FICO Blaze Advisor")
                                        .size(11.0)
                                        .color(theme.text_muted),
                                );
                            });
                        });
                        ui.set_width(ui.available_width());
                    });
                ui.separator();

                let copy_ctx = ctx.clone();
                let mut copy = |code: &str| copy_ctx.copy_text(code.to_owned());
                crate::ui::render_messages(ui, &self.state, theme, &mut copy);
            });
    }

    pub(in crate::app) fn render_toasts(&self, ctx: &egui::Context, theme: &NovaTheme) {
        if self.state.status_messages.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("status_toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -70.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (message, _) in &self.state.status_messages {
                    egui::Frame::new()
                        .fill(theme.surface_raised)
                        .stroke(egui::Stroke::new(1.0, theme.border))
                        .corner_radius(6.0)
                        .inner_margin(Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(message)
                                    .size(12.0)
                                    .color(theme.text_primary),
                            );
                        });
                    ui.add_space(4.0);
                }
            });
    }
}
