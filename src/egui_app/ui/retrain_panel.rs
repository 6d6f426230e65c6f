use super::style;
use super::*;
use eframe::egui::{Frame, Margin, RichText};

impl EguiApp {
    pub(super) fn render_retrain_panel(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.retrain.visible {
            return;
        }
        let palette = style::palette();
        egui::SidePanel::right("retrain_panel")
            .resizable(false)
            .exact_width(280.0)
            .frame(
                Frame::new()
                    .fill(palette.bg_card)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Retrain Model")
                        .size(17.0)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(
                        "Upload labeled waste images to help improve the classifier.",
                    )
                    .color(palette.text_muted),
                );
                ui.add_space(12.0);

                let submitting = self.controller.ui.retrain.submitting;
                let pick = egui::Button::new(
                    RichText::new("Select Images").color(egui::Color32::WHITE),
                )
                .fill(palette.accent);
                if ui.add_enabled(!submitting, pick).clicked() {
                    self.controller.pick_retrain_files_via_dialog();
                }
                if submitting {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new().color(palette.accent));
                        ui.label(RichText::new("Uploading...").color(palette.text_muted));
                    });
                }

                if let Some(message) = &self.controller.ui.retrain.message {
                    ui.add_space(12.0);
                    let (fill, text) = if message.success {
                        (palette.success_soft, palette.success)
                    } else {
                        (palette.error_soft, palette.error)
                    };
                    Frame::new()
                        .fill(fill)
                        .corner_radius(8)
                        .inner_margin(Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(&message.text).color(text));
                        });
                }
            });
    }
}
