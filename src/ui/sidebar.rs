//! Left sidebar: brand header, conversation actions, and settings.

use eframe::egui::{self, RichText};

use crate::config::Settings;
use crate::state::ClientState;
use crate::ui::theme::{self, NovaTheme};
use crate::validation::validate_api_url;

/// What the user did in the sidebar this frame. The caller applies the
/// side effects (resetting state, notifying the backend, persisting).
#[derive(Default)]
pub struct SidebarResponse {
    pub new_conversation: bool,
    pub api_url_changed: bool,
    pub theme_changed: bool,
}

/// Render the sidebar contents. Mutates `settings` in place for the
/// editable fields and reports what changed.
pub fn render_sidebar(
    ui: &mut egui::Ui,
    state: &ClientState,
    settings: &mut Settings,
    theme: &NovaTheme,
) -> SidebarResponse {
    let mut response = SidebarResponse::default();

    // Brand header
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        theme::render_avatar(ui, "Nova", 30.0, theme.accent);
        ui.add_space(6.0);
        ui.label(
            RichText::new("Nova Assistant")
                .size(15.0)
                .strong()
                .color(theme.text_primary),
        );
    });
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    // Conversation actions
    if ui
        .add_sized(
            [ui.available_width() - 16.0, 34.0],
            egui::Button::new(RichText::new("💬  Nova conversa").size(13.0)),
        )
        .clicked()
    {
        response.new_conversation = true;
    }

    ui.add_space(12.0);

    // Conversation status
    let msg_count = state.conversation.messages.len();
    let status = match &state.conversation.conversation_id {
        Some(id) => format!("Conversa {} · {} mensagens", id, msg_count),
        None => format!("Conversa nova · {} mensagens", msg_count),
    };
    ui.label(RichText::new(status).size(11.0).color(theme.text_muted));

    ui.add_space(12.0);
    ui.separator();

    // Settings
    egui::CollapsingHeader::new(RichText::new("Configurações").size(12.0))
        .default_open(false)
        .show(ui, |ui| {
            ui.label(
                RichText::new("URL da API")
                    .size(11.0)
                    .color(theme.text_muted),
            );
            let url_edit = ui.text_edit_singleline(&mut settings.api_url);
            match validate_api_url(&settings.api_url) {
                Ok(()) => {
                    // Applied on blur; `changed` only fires on edit frames.
                    if url_edit.lost_focus() {
                        response.api_url_changed = true;
                    }
                }
                Err(reason) => {
                    ui.label(RichText::new(reason).size(11.0).color(theme.error));
                }
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Tema").size(11.0).color(theme.text_muted));
                let mut dark = settings.theme != "light";
                if ui.selectable_label(dark, "Escuro").clicked() && !dark {
                    dark = true;
                    response.theme_changed = true;
                }
                if ui.selectable_label(!dark, "Claro").clicked() && dark {
                    dark = false;
                    response.theme_changed = true;
                }
                settings.theme = if dark { "dark".into() } else { "light".into() };
            });
        });

    response
}
