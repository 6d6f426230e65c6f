use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_card: Color32,
    pub panel_outline: Color32,
    pub bar_track: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub error_soft: Color32,
    pub success: Color32,
    pub success_soft: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(250, 250, 249),
        bg_secondary: Color32::from_rgb(245, 245, 244),
        bg_card: Color32::WHITE,
        panel_outline: Color32::from_rgb(231, 229, 228),
        bar_track: Color32::from_rgb(231, 229, 228),
        text_primary: Color32::from_rgb(41, 37, 36),
        text_muted: Color32::from_rgb(120, 113, 108),
        accent: Color32::from_rgb(217, 119, 6),
        accent_soft: Color32::from_rgb(254, 243, 199),
        warning: Color32::from_rgb(234, 88, 12),
        error: Color32::from_rgb(185, 28, 28),
        error_soft: Color32::from_rgb(254, 226, 226),
        success: Color32::from_rgb(21, 128, 61),
        success_soft: Color32::from_rgb(220, 252, 231),
    }
}

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            StatusTone::Idle => "Ready",
            StatusTone::Busy => "Working",
            StatusTone::Info => "Info",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Busy => palette.accent,
        StatusTone::Info => palette.success,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.error,
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_card;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_card;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent_soft;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_primary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette.bg_secondary, palette);
    set_rounded(&mut visuals.widgets.hovered, palette.accent_soft, palette);
    set_rounded(&mut visuals.widgets.active, palette.accent_soft, palette);
    set_rounded(&mut visuals.widgets.open, palette.accent_soft, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rounded(vis: &mut WidgetVisuals, fill: Color32, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = fill;
    vis.weak_bg_fill = fill;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn section_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub fn card_corner_radius() -> CornerRadius {
    CornerRadius::same(12)
}

/// Light tint of a category color for card backgrounds.
pub fn tint(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 28)
}
