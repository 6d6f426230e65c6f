use super::*;
use crate::egui_app::state::ViewPhase;
use std::time::{Duration, Instant};

/// Repaint cadence while workers or the retrain countdown are pending.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.controller.tick(Instant::now());
        self.handle_file_drops(ctx);

        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_retrain_panel(ctx);
        self.render_service_window(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_WIDTH);
                        ui.add_space(24.0);
                        self.render_main(ui);
                        ui.add_space(24.0);
                    });
                });
        });

        if self.controller.has_pending_jobs() || self.controller.ui.retrain.hide_at.is_some() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}

impl EguiApp {
    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let (hovered, dropped) =
            ctx.input(|i| (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone()));
        self.controller.ui.drop_hovered = hovered && self.controller.phase() == ViewPhase::Idle;
        if !dropped.is_empty() {
            self.controller.accept_dropped_files(&dropped);
        }
    }

    fn render_main(&mut self, ui: &mut egui::Ui) {
        if let Some(error) = self.controller.ui.error.clone() {
            self.render_error_banner(ui, &error);
            ui.add_space(12.0);
        }
        match self.controller.phase() {
            ViewPhase::Idle => self.render_uploader(ui),
            ViewPhase::Loading => self.render_loading(ui),
            ViewPhase::Result => self.render_result(ui),
        }
    }
}
