use super::style;
use super::*;
use eframe::egui::{Frame, Margin, RichText};

impl EguiApp {
    pub(super) fn render_loading(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let preview = self.preview_texture(ui.ctx());
        Frame::new()
            .fill(palette.bg_card)
            .stroke(style::section_stroke())
            .corner_radius(style::card_corner_radius())
            .inner_margin(Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if let Some(tex) = preview {
                        ui.add(
                            egui::Image::from_texture(egui::load::SizedTexture::from_handle(&tex))
                                .max_width(220.0)
                                .max_height(220.0)
                                .corner_radius(8),
                        );
                        ui.add_space(16.0);
                    }
                    ui.add(egui::Spinner::new().size(32.0).color(palette.accent));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Analyzing waste...")
                            .size(16.0)
                            .color(palette.text_primary),
                    );
                });
            });
    }
}
