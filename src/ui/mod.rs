//! UI rendering modules for the Nova client.
//!
//! This module contains all egui-based UI rendering code, organized by
//! component:
//! - `intro`: the startup intro overlay
//! - `sidebar`: brand header, conversation actions, settings
//! - `messages`: chat transcript rendering (segmentation, markdown, code)
//! - `theme`: color palettes and styling utilities

pub mod intro;
pub mod messages;
pub mod sidebar;
pub mod theme;

pub use intro::IntroEffect;
pub use messages::render_messages;
pub use sidebar::{render_sidebar, SidebarResponse};
pub use theme::NovaTheme;
