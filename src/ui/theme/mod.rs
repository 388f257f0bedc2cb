//! Color themes and styling utilities for the Nova client.

pub mod colors;
pub mod fonts;
pub mod widgets;

pub use colors::NovaTheme;
pub use fonts::{apply_app_style, configure_text_styles};
pub use widgets::render_avatar;
