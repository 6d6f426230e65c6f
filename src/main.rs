#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the Wastelens waste classification client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use wastelens::api::ApiClient;
use wastelens::config::{self, AppSettings};
use wastelens::egui_app::controller::EguiController;
use wastelens::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use wastelens::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = load_settings();
    tracing::info!(base_url = %settings.api.base_url, "Using classification service");
    let api = Arc::new(ApiClient::from_settings(&settings.api));
    let controller = EguiController::new(api, settings);

    let viewport = egui::ViewportBuilder::default()
        .with_title("Waste Classifier")
        .with_inner_size(egui::vec2(980.0, 760.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Waste Classifier",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(controller)))),
    )?;
    Ok(())
}

/// Load `config.toml`, falling back to defaults when it is missing or broken.
fn load_settings() -> AppSettings {
    config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Using default settings");
        AppSettings::default()
    })
}
