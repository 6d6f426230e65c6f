use super::style;
use super::*;
use crate::egui_app::view_model::{self, PredictionRowView};
use eframe::egui::{Frame, Margin, RichText};

const BAR_HEIGHT: f32 = 10.0;
const BAR_LABEL_WIDTH: f32 = 150.0;
const BAR_PERCENT_WIDTH: f32 = 56.0;

impl EguiApp {
    pub(super) fn render_result(&mut self, ui: &mut egui::Ui) {
        let Some(prediction) = self.controller.ui.prediction.as_ref() else {
            return;
        };
        let view = view_model::result_view(prediction);
        let preview = self.preview_texture(ui.ctx());
        let palette = style::palette();
        let info = view.info;

        Frame::new()
            .fill(palette.bg_card)
            .stroke(style::section_stroke())
            .corner_radius(style::card_corner_radius())
            .inner_margin(Margin::same(20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if let Some(tex) = preview {
                        ui.add(
                            egui::Image::from_texture(egui::load::SizedTexture::from_handle(&tex))
                                .max_width(160.0)
                                .max_height(160.0)
                                .corner_radius(8),
                        );
                        ui.add_space(16.0);
                    }
                    ui.vertical(|ui| {
                        ui.label(RichText::new(info.icon).size(36.0));
                        ui.label(
                            RichText::new(info.name)
                                .size(24.0)
                                .strong()
                                .color(info.color),
                        );
                        ui.add_space(4.0);
                        Frame::new()
                            .fill(style::tint(info.color))
                            .corner_radius(10)
                            .inner_margin(Margin::symmetric(10, 4))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(format!("{} confidence", view.confidence_label))
                                        .strong()
                                        .color(info.color),
                                );
                            });
                    });
                });

                ui.add_space(16.0);
                Frame::new()
                    .fill(style::tint(info.color))
                    .corner_radius(8)
                    .inner_margin(Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new("💡 Disposal tip").strong());
                        ui.label(RichText::new(info.tip).color(palette.text_primary));
                    });

                ui.add_space(16.0);
                ui.label(
                    RichText::new("All predictions")
                        .strong()
                        .color(palette.text_primary),
                );
                ui.add_space(6.0);
                for row in &view.rows {
                    render_probability_row(ui, row);
                }

                ui.add_space(12.0);
                ui.label(
                    RichText::new(&view.latency_label)
                        .small()
                        .color(palette.text_muted),
                );
            });

        ui.add_space(16.0);
        let again = egui::Button::new(
            RichText::new("Analyze Another Image").color(egui::Color32::WHITE),
        )
        .fill(palette.accent);
        if ui.add(again).clicked() {
            self.controller.reset();
        }
    }
}

fn render_probability_row(ui: &mut egui::Ui, row: &PredictionRowView) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        let label =
            RichText::new(format!("{} {}", row.icon, row.name)).color(palette.text_primary);
        let label = if row.is_top { label.strong() } else { label };
        ui.add_sized(
            egui::vec2(BAR_LABEL_WIDTH, 18.0),
            egui::Label::new(label).truncate(),
        );
        let track_width = (ui.available_width() - BAR_PERCENT_WIDTH).max(40.0);
        let (track, _) =
            ui.allocate_exact_size(egui::vec2(track_width, BAR_HEIGHT), egui::Sense::hover());
        let radius = BAR_HEIGHT / 2.0;
        ui.painter().rect_filled(track, radius, palette.bar_track);
        if row.fraction > 0.0 {
            let mut fill = track;
            fill.set_width(track.width() * row.fraction);
            ui.painter().rect_filled(fill, radius, row.color);
        }
        ui.add_sized(
            egui::vec2(BAR_PERCENT_WIDTH, 18.0),
            egui::Label::new(RichText::new(&row.percent_label).color(palette.text_muted)),
        );
    });
    ui.add_space(4.0);
}
