//! Chat transcript rendering: bubbles, avatars, and code blocks.

use eframe::egui::{self, RichText};

use crate::conversation::{ChatMessage, Role};
use crate::state::ClientState;
use crate::ui::theme::{self, NovaTheme};

use super::highlight::highlight_code;
use super::markdown::render_markdown;
use super::segment::{segment, Segment};

/// Render the central chat panel with the message list.
///
/// `copy` is the clipboard capability invoked when a code block's copy
/// button is clicked; it receives the block's exact code text. Keeping it
/// injected leaves the segmentation pipeline free of environment
/// dependencies.
pub fn render_messages(
    ui: &mut egui::Ui,
    state: &ClientState,
    theme: &NovaTheme,
    copy: &mut dyn FnMut(&str),
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            for msg in &state.conversation.messages {
                match msg.role {
                    Role::Assistant => render_assistant_message(ui, msg, theme, copy),
                    Role::User => render_user_message(ui, msg, theme),
                }
                ui.add_space(14.0);
            }

            if state.awaiting_reply {
                render_typing_indicator(ui, theme);
            }

            ui.add_space(8.0);
        });
}

/// Assistant bubble: avatar on the left, sender header, segmented body.
fn render_assistant_message(
    ui: &mut egui::Ui,
    msg: &ChatMessage,
    theme: &NovaTheme,
    copy: &mut dyn FnMut(&str),
) {
    ui.horizontal_top(|ui| {
        ui.add_space(12.0);
        theme::render_avatar(ui, "Nova", 32.0, theme.accent);
        ui.add_space(10.0);

        ui.vertical(|ui| {
            ui.set_max_width(ui.available_width() * 0.8);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(Role::Assistant.label())
                        .size(13.0)
                        .strong()
                        .color(theme.text_primary),
                );
                if !msg.timestamp.is_empty() {
                    ui.label(
                        RichText::new(&msg.timestamp)
                            .size(11.0)
                            .color(theme.text_muted),
                    );
                }
            });

            egui::Frame::new()
                .fill(theme.surface_raised)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(12, 10))
                .show(ui, |ui| {
                    for seg in segment(&msg.content) {
                        match seg {
                            Segment::Text { raw } => render_markdown(ui, &raw, theme),
                            Segment::Code {
                                language,
                                display_label,
                                code,
                            } => render_code_block(ui, &language, &display_label, &code, theme, copy),
                        }
                    }
                });
        });
    });
}

/// User bubble: right-aligned, accent fill, plain text content.
fn render_user_message(ui: &mut egui::Ui, msg: &ChatMessage, theme: &NovaTheme) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() * 0.2);
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                if !msg.timestamp.is_empty() {
                    ui.label(
                        RichText::new(&msg.timestamp)
                            .size(11.0)
                            .color(theme.text_muted),
                    );
                }
                egui::Frame::new()
                    .fill(theme.accent)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(&msg.content)
                                .size(14.0)
                                .color(egui::Color32::WHITE),
                        );
                    });
            });
        });
        ui.add_space(12.0);
    });
}

/// A fenced code block: header strip with language label and copy
/// button, syntect-highlighted body below.
fn render_code_block(
    ui: &mut egui::Ui,
    language: &str,
    display_label: &str,
    code: &str,
    theme: &NovaTheme,
    copy: &mut dyn FnMut(&str),
) {
    ui.add_space(4.0);
    egui::Frame::new()
        .fill(theme.code_background)
        .corner_radius(6.0)
        .show(ui, |ui| {
            // Header strip
            egui::Frame::new()
                .fill(theme.code_header)
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(display_label)
                                .size(11.0)
                                .color(theme.text_secondary),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .small_button(RichText::new("Copiar").size(11.0))
                                .on_hover_text("Copiar código")
                                .clicked()
                            {
                                copy(code);
                            }
                        });
                    });
                });

            // Body
            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.label(highlight_code(code, language));
                });
        });
    ui.add_space(4.0);
}

/// Spinner row shown while a request is in flight.
fn render_typing_indicator(ui: &mut egui::Ui, theme: &NovaTheme) {
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        theme::render_avatar(ui, "Nova", 32.0, theme.accent);
        ui.add_space(10.0);
        ui.add(egui::Spinner::new().size(16.0).color(theme.accent));
        ui.label(
            RichText::new("Nova está digitando...")
                .size(13.0)
                .italics()
                .color(theme.text_muted),
        );
    });
}
