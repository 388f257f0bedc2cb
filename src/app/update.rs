use std::time::Duration;

use eframe::egui;

use super::core::NovaApp;
use crate::events::process_events;

impl eframe::App for NovaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        process_events(&self.event_rx, &mut self.state);

        // Persist the conversation id as soon as the backend assigns one.
        if self.state.conversation.conversation_id != self.settings.last_conversation_id {
            self.persist_settings();
        }

        // Global keyboard shortcuts
        let mut new_conversation = false;
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
                new_conversation = true;
            }
            if i.modifiers.ctrl && i.key_pressed(egui::Key::B) {
                self.show_sidebar = !self.show_sidebar;
            }
        });
        if new_conversation {
            self.state.new_conversation();
            self.persist_settings();
        }

        // Keep polling for backend events and toast expiry.
        ctx.request_repaint_after(Duration::from_millis(100));
        self.state.purge_old_status_messages(4);

        let theme = self.get_theme();

        if self.show_sidebar {
            self.render_sidebar_panel(ctx, &theme);
        }
        self.render_input_panel(ctx, &theme);
        self.render_central_panel(ctx, &theme);
        self.render_toasts(ctx, &theme);

        if let Some(intro) = &self.intro {
            if intro.is_done() {
                self.intro = None;
                self.state.seed_greeting();
            } else {
                intro.render(ctx, &theme);
            }
        }
    }
}
