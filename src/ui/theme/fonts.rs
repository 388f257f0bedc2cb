//! Text style definitions and global style application.

use eframe::egui::{self, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

/// Configure the text style hierarchy.
///
/// - **Small**: 10px proportional - timestamps, metadata
/// - **Body**: 14px proportional - chat prose, labels
/// - **Button**: 13px proportional - buttons
/// - **Heading**: 16px proportional - section headers
/// - **Monospace**: 13px monospace - code blocks, inline code
///
/// Two named styles cover chat-specific sizes:
///
/// - **chat_sender**: 13px proportional - sender labels above bubbles
/// - **chat_timestamp**: 11px proportional - timestamps next to senders
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (
            TextStyle::Name("chat_sender".into()),
            FontId::new(13.0, Proportional),
        ),
        (
            TextStyle::Name("chat_timestamp".into()),
            FontId::new(11.0, Proportional),
        ),
    ]
    .into()
}

/// Apply widget styling shared by both theme variants: text styles,
/// spacing, and rounded corners on interactive widgets.
pub fn apply_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_cover_standard_set() {
        let styles = configure_text_styles();
        assert!(styles.contains_key(&TextStyle::Small));
        assert!(styles.contains_key(&TextStyle::Body));
        assert!(styles.contains_key(&TextStyle::Button));
        assert!(styles.contains_key(&TextStyle::Heading));
        assert!(styles.contains_key(&TextStyle::Monospace));
        assert!(styles.contains_key(&TextStyle::Name("chat_sender".into())));
    }
}
