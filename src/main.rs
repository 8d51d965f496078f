//! Neurotic - wire switches, perceptrons and lights and watch signals flow

use eframe::egui;
use log::{error, info};
use neurotic::constants::window;
use neurotic::{EditorConfig, NodeEditor};

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::from_env();
    info!("Starting with {:?}", config);

    let editor = match NodeEditor::new(config.clone()) {
        Ok(editor) => editor,
        Err(err) => {
            error!("Failed to build scene: {}", err);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(window::TITLE, options, Box::new(|_cc| Ok(Box::new(editor))))
}
