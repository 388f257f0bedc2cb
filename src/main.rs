//! Nova - chat client for the FICO Blaze Advisor assistant
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for HTTP requests
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use nova_client::app::NovaApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Nova Assistant",
        options,
        Box::new(|cc| Ok(Box::new(NovaApp::new(cc)))),
    )
}
