//! Application module structure for NovaApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: NovaApp struct, initialization, and message dispatch
//! - `update`: Main update loop and global shortcuts
//! - `ui::panels`: Sidebar, central chat panel, and status toasts
//! - `ui::input`: Message input panel with history recall

pub mod core;
pub mod ui;
pub mod update;

// Re-export NovaApp for public API
pub use core::NovaApp;
