use super::style;
use super::*;
use eframe::egui::RichText;

impl EguiApp {
    pub(super) fn render_service_window(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.service.open {
            return;
        }
        let palette = style::palette();
        let mut open = true;
        let mut refresh = false;
        egui::Window::new("Service")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                let service = &self.controller.ui.service;
                ui.label(
                    RichText::new(self.controller.api_base_url())
                        .small()
                        .color(palette.text_muted),
                );
                ui.add_space(6.0);
                if service.checking {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new().color(palette.accent));
                        ui.label("Checking service...");
                    });
                }
                egui::Grid::new("service_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Health").strong());
                        match &service.health {
                            Some(Ok(health)) => ui.label(health.summary()),
                            Some(Err(err)) => ui.colored_label(palette.error, err),
                            None => ui.label("-"),
                        };
                        ui.end_row();

                        ui.label(RichText::new("Requests").strong());
                        match &service.stats {
                            Some(Ok(stats)) => ui.label(format!(
                                "{} total, {} predictions",
                                stats.total_requests, stats.predictions.count
                            )),
                            Some(Err(err)) => ui.colored_label(palette.error, err),
                            None => ui.label("-"),
                        };
                        ui.end_row();

                        ui.label(RichText::new("Latency").strong());
                        match &service.stats {
                            Some(Ok(stats)) => ui.label(format!(
                                "avg {:.0}ms (min {:.0}, max {:.0})",
                                stats.predictions.average_latency_ms,
                                stats.predictions.min_latency_ms,
                                stats.predictions.max_latency_ms
                            )),
                            _ => ui.label("-"),
                        };
                        ui.end_row();

                        ui.label(RichText::new("Uptime").strong());
                        match &service.stats {
                            Some(Ok(stats)) => ui.label(format!("{:.1} h", stats.uptime_hours)),
                            _ => ui.label("-"),
                        };
                        ui.end_row();

                        ui.label(RichText::new("Classes").strong());
                        match &service.classes {
                            Some(Ok(classes)) => ui.label(classes.classes.join(", ")),
                            Some(Err(err)) => ui.colored_label(palette.error, err),
                            None => ui.label("-"),
                        };
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui
                    .add_enabled(!service.checking, egui::Button::new("Refresh"))
                    .clicked()
                {
                    refresh = true;
                }
            });
        if refresh {
            self.controller.refresh_service_info();
        }
        if !open {
            self.controller.close_service_info();
        }
    }
}
