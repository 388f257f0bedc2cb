use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::config::{load_settings, save_settings, Settings};
use crate::conversation::Role;
use crate::input_state::InputState;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;
use crate::ui::theme::{apply_app_style, NovaTheme};
use crate::ui::IntroEffect;

/// How many input-history entries survive into the settings file.
const PERSISTED_HISTORY_LIMIT: usize = 50;

/// Main application struct holding the UI-side state and the channel
/// endpoints shared with the backend thread.
pub struct NovaApp {
    pub(super) state: ClientState,
    pub(super) settings: Settings,
    pub(super) input: InputState,
    pub(super) action_tx: Sender<BackendAction>,
    pub(super) event_rx: Receiver<GuiEvent>,
    pub(super) intro: Option<IntroEffect>,
    pub(super) show_sidebar: bool,
    /// URL the backend is currently pointed at, to skip no-op updates.
    pub(super) applied_api_url: String,
}

impl NovaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_default();

        if settings.theme == "light" {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        }
        apply_app_style(&cc.egui_ctx);

        let (action_tx, action_rx) = crossbeam_channel::unbounded::<BackendAction>();
        let (event_tx, event_rx) = crossbeam_channel::unbounded::<GuiEvent>();

        let api_url = settings.api_url.clone();
        std::thread::spawn(move || {
            crate::backend::run_backend(action_rx, event_tx, api_url);
        });

        // Resume the previous conversation if one was saved.
        if let Some(id) = settings.last_conversation_id.clone() {
            let _ = action_tx.send(BackendAction::FetchConversation(id));
        }

        let input = InputState::with_history(settings.history.clone());
        let applied_api_url = settings.api_url.clone();

        Self {
            state: ClientState::new(),
            settings,
            input,
            action_tx,
            event_rx,
            intro: Some(IntroEffect::new()),
            show_sidebar: true,
            applied_api_url,
        }
    }

    pub(super) fn get_theme(&self) -> NovaTheme {
        if self.settings.theme == "light" {
            NovaTheme::light()
        } else {
            NovaTheme::dark()
        }
    }

    /// Takes the current input, appends it to the transcript and hands it to
    /// the backend. Does nothing while a reply is still pending.
    pub(super) fn send_current_message(&mut self) {
        if self.state.awaiting_reply {
            return;
        }
        let Some(text) = self.input.take_message() else {
            return;
        };
        self.state.push_message(Role::User, text.clone());
        let conversation_id = self.state.conversation.conversation_id.clone();
        let _ = self
            .action_tx
            .send(BackendAction::SendMessage {
                text,
                conversation_id,
            });
        self.state.awaiting_reply = true;
        self.persist_settings();
    }

    pub(super) fn persist_settings(&mut self) {
        let history = &self.input.history;
        let skip = history.len().saturating_sub(PERSISTED_HISTORY_LIMIT);
        self.settings.history = history[skip..].to_vec();
        self.settings.last_conversation_id = self.state.conversation.conversation_id.clone();
        if let Err(e) = save_settings(&self.settings) {
            self.state.log_system(format!("Falha ao salvar configurações: {e}"));
        }
    }
}
