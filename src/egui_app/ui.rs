//! egui renderer for the application UI.

mod chrome;
mod loading;
mod result_view;
mod retrain_panel;
mod service_window;
pub mod style;
mod update;
mod uploader;

use crate::egui_app::controller::EguiController;
use eframe::egui::{self, TextureHandle, TextureOptions};

/// Smallest window size the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(520.0, 560.0);
/// Width of the centered content column.
const CONTENT_WIDTH: f32 = 640.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    /// Uploaded preview texture, keyed by the attempt it belongs to.
    preview_tex: Option<(u64, TextureHandle)>,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
            preview_tex: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Texture for the current preview, uploading it on first use.
    fn preview_texture(&mut self, ctx: &egui::Context) -> Option<TextureHandle> {
        let Some(preview) = self.controller.ui.preview.as_ref() else {
            self.preview_tex = None;
            return None;
        };
        match &self.preview_tex {
            Some((attempt, tex)) if *attempt == preview.attempt => return Some(tex.clone()),
            _ => {}
        }
        let tex = ctx.load_texture(
            format!("preview-{}", preview.attempt),
            preview.image.clone(),
            TextureOptions::LINEAR,
        );
        self.preview_tex = Some((preview.attempt, tex.clone()));
        Some(tex)
    }
}
