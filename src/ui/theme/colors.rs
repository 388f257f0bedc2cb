//! Nova color palettes.
//!
//! The product identity is a dark slate background with the "nova blue"
//! accent used for the user's bubbles, the avatar ring, and focus states.

use eframe::egui::Color32;

/// Complete color palette for one theme variant.
#[derive(Debug, Clone)]
pub struct NovaTheme {
    /// Window background.
    pub background: Color32,
    /// Panel background (sidebar, input bar).
    pub surface: Color32,
    /// Raised elements (assistant bubbles, cards).
    pub surface_raised: Color32,
    /// Panel and bubble borders.
    pub border: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Nova blue. User bubbles, links, focus rings.
    pub accent: Color32,

    /// Code block body background.
    pub code_background: Color32,
    /// Code block header strip (label + copy button).
    pub code_header: Color32,
    /// Inline code background inside prose.
    pub inline_code_background: Color32,

    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

impl NovaTheme {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(15, 17, 23),
            surface: Color32::from_rgb(21, 24, 32),
            surface_raised: Color32::from_rgb(32, 36, 46),
            border: Color32::from_rgb(45, 50, 62),

            text_primary: Color32::from_rgb(235, 238, 245),
            text_secondary: Color32::from_rgb(190, 196, 208),
            text_muted: Color32::from_rgb(130, 138, 152),

            accent: Color32::from_rgb(59, 130, 246),

            code_background: Color32::from_rgb(24, 26, 33),
            code_header: Color32::from_rgb(38, 42, 52),
            inline_code_background: Color32::from_rgb(45, 50, 62),

            success: Color32::from_rgb(74, 222, 128),
            warning: Color32::from_rgb(250, 166, 26),
            error: Color32::from_rgb(248, 113, 113),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(247, 248, 250),
            surface: Color32::from_rgb(255, 255, 255),
            surface_raised: Color32::from_rgb(240, 242, 246),
            border: Color32::from_rgb(215, 220, 228),

            text_primary: Color32::from_rgb(25, 30, 40),
            text_secondary: Color32::from_rgb(70, 78, 92),
            text_muted: Color32::from_rgb(130, 138, 152),

            accent: Color32::from_rgb(37, 99, 235),

            code_background: Color32::from_rgb(28, 31, 39),
            code_header: Color32::from_rgb(42, 46, 56),
            inline_code_background: Color32::from_rgb(228, 231, 237),

            success: Color32::from_rgb(22, 163, 74),
            warning: Color32::from_rgb(217, 119, 6),
            error: Color32::from_rgb(220, 38, 38),
        }
    }
}
