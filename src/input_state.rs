//! Input state management for message composition and history recall.
//!
//! Separates input handling from the main application state: the compose
//! box contents plus up/down navigation through previously sent messages.

/// Manages all input-related state for the chat client.
#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,

    /// Sent-message history (for up/down arrow navigation)
    pub history: Vec<String>,

    /// Current position in history (None = not navigating)
    pub history_pos: Option<usize>,

    /// Saved input when entering history mode
    pub history_saved_input: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create input state with history preloaded from settings.
    pub fn with_history(history: Vec<String>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    /// Take the composed message for sending, recording it in history.
    /// Returns None when the input is empty or whitespace.
    pub fn take_message(&mut self) -> Option<String> {
        let text = self.message_input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        // Skip consecutive duplicates in history
        if self.history.last() != Some(&text) {
            self.history.push(text.clone());
        }
        self.message_input.clear();
        self.history_pos = None;
        self.history_saved_input = None;
        Some(text)
    }

    /// Step backwards through history (ArrowUp).
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_pos {
            None => {
                // Store current text to restore if the user navigates back
                self.history_saved_input = Some(self.message_input.clone());
                self.history_pos = Some(self.history.len() - 1);
            }
            Some(pos) if pos > 0 => {
                self.history_pos = Some(pos - 1);
            }
            Some(_) => {}
        }
        if let Some(pos) = self.history_pos {
            if let Some(h) = self.history.get(pos) {
                self.message_input = h.clone();
            }
        }
    }

    /// Step forwards through history (ArrowDown); past the newest entry
    /// the saved in-progress input is restored.
    pub fn history_next(&mut self) {
        let Some(pos) = self.history_pos else {
            return;
        };
        if pos + 1 < self.history.len() {
            self.history_pos = Some(pos + 1);
            if let Some(h) = self.history.get(pos + 1) {
                self.message_input = h.clone();
            }
        } else {
            self.history_pos = None;
            self.message_input = self.history_saved_input.take().unwrap_or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_message_trims_and_records() {
        let mut input = InputState::new();
        input.message_input = "  o que é um ruleset?  ".into();
        assert_eq!(input.take_message().as_deref(), Some("o que é um ruleset?"));
        assert!(input.message_input.is_empty());
        assert_eq!(input.history, vec!["o que é um ruleset?"]);
    }

    #[test]
    fn test_take_message_rejects_blank() {
        let mut input = InputState::new();
        input.message_input = "   ".into();
        assert!(input.take_message().is_none());
        assert!(input.history.is_empty());
    }

    #[test]
    fn test_take_message_skips_consecutive_duplicates() {
        let mut input = InputState::new();
        input.message_input = "mesma pergunta".into();
        input.take_message();
        input.message_input = "mesma pergunta".into();
        input.take_message();
        assert_eq!(input.history.len(), 1);
    }

    #[test]
    fn test_history_navigation_round_trip() {
        let mut input = InputState::with_history(vec!["primeira".into(), "segunda".into()]);
        input.message_input = "rascunho".into();

        input.history_prev();
        assert_eq!(input.message_input, "segunda");
        input.history_prev();
        assert_eq!(input.message_input, "primeira");
        // At the oldest entry, another step stays put
        input.history_prev();
        assert_eq!(input.message_input, "primeira");

        input.history_next();
        assert_eq!(input.message_input, "segunda");
        // Stepping past the newest restores the draft
        input.history_next();
        assert_eq!(input.message_input, "rascunho");
        assert!(input.history_pos.is_none());
    }

    #[test]
    fn test_history_next_without_navigation_is_noop() {
        let mut input = InputState::with_history(vec!["x".into()]);
        input.message_input = "draft".into();
        input.history_next();
        assert_eq!(input.message_input, "draft");
    }
}
