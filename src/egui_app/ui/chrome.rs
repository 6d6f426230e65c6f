use super::style;
use super::*;
use eframe::egui::{Frame, Margin, RichText, StrokeKind};

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_card)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("♻").size(22.0).color(palette.accent));
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("Waste Classifier")
                                .strong()
                                .size(18.0)
                                .color(palette.text_primary),
                        );
                        ui.label(
                            RichText::new("AI-powered waste sorting assistant")
                                .small()
                                .color(palette.text_muted),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let retrain_label = if self.controller.ui.retrain.visible {
                            "Hide Retraining"
                        } else {
                            "Retrain Model"
                        };
                        if ui.button(retrain_label).clicked() {
                            self.controller.toggle_retrain_panel();
                        }
                        if ui
                            .button("Service")
                            .on_hover_text("Check the classification service")
                            .clicked()
                        {
                            self.controller.refresh_service_info();
                        }
                    });
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(badge_rect, 3.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        3.0,
                        style::section_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }

    pub(super) fn render_error_banner(&mut self, ui: &mut egui::Ui, message: &str) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.error_soft)
            .stroke(egui::Stroke::new(1.0, palette.error))
            .corner_radius(8)
            .inner_margin(Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(message).color(palette.error));
            });
    }
}
