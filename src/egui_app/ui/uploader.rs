use super::style;
use super::*;
use crate::api::SUPPORTED_EXTENSIONS;
use eframe::egui::{RichText, Shape, Stroke};

const DROP_ZONE_HEIGHT: f32 = 260.0;

impl EguiApp {
    /// Drop zone plus file picker; inert while a prediction is in flight.
    pub(super) fn render_uploader(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let enabled = !self.controller.ui.loading;
        let hovered = self.controller.ui.drop_hovered;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT),
            egui::Sense::click(),
        );
        let (fill, outline) = if hovered {
            (palette.accent_soft, palette.accent)
        } else {
            (palette.bg_card, palette.panel_outline)
        };
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, style::card_corner_radius(), fill);
        let outline_rect = rect.shrink(1.0);
        let corners = [
            outline_rect.left_top(),
            outline_rect.right_top(),
            outline_rect.right_bottom(),
            outline_rect.left_bottom(),
            outline_rect.left_top(),
        ];
        painter.extend(Shape::dashed_line(
            &corners,
            Stroke::new(2.0, outline),
            8.0,
            6.0,
        ));

        let mut content = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink(24.0))
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );
        content.add_space(36.0);
        content.label(RichText::new("📷").size(40.0));
        content.add_space(8.0);
        let headline = if hovered {
            "Drop the image here"
        } else {
            "Drag & drop a waste image"
        };
        content.label(
            RichText::new(headline)
                .size(18.0)
                .strong()
                .color(palette.text_primary),
        );
        content.label(RichText::new("or").color(palette.text_muted));
        content.add_space(4.0);
        let browse = content.add_enabled(
            enabled,
            egui::Button::new(RichText::new("Browse Files").color(egui::Color32::WHITE))
                .fill(palette.accent),
        );
        content.add_space(10.0);
        content.label(
            RichText::new(format!("Supports {}", supported_formats_label()))
                .small()
                .color(palette.text_muted),
        );

        if enabled && (browse.clicked() || response.clicked()) {
            self.controller.select_image_via_dialog();
        }
    }
}

fn supported_formats_label() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_label_lists_every_extension() {
        assert_eq!(supported_formats_label(), "JPEG, JPG, PNG, WEBP");
    }
}
