use egui::{Color32, FontFamily, FontId, Style, TextStyle, Visuals};

pub const BG_PURE_BLACK: Color32 = Color32::from_rgb(0, 0, 0);
pub const BG_PANEL: Color32 = Color32::from_rgb(5, 5, 7);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(168, 168, 171);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 107, 112);
pub const TEXT_BRIGHT: Color32 = Color32::from_rgb(220, 220, 225);

pub const ACCENT_GREEN: Color32 = Color32::from_rgb(46, 172, 35);
pub const ACCENT_RED: Color32 = Color32::from_rgb(172, 35, 35);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(84, 102, 206);
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(172, 117, 35);

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = Style::default();

    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.hyperlink_color = ACCENT_BLUE;
    visuals.faint_bg_color = BG_PANEL;
    visuals.extreme_bg_color = BG_PURE_BLACK;
    visuals.code_bg_color = BG_PURE_BLACK;
    visuals.warn_fg_color = ACCENT_ORANGE;
    visuals.error_fg_color = ACCENT_RED;
    visuals.window_fill = BG_PANEL;
    visuals.panel_fill = BG_PANEL;
    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);

    style.text_styles = [
        (
            TextStyle::Small,
            FontId::new(11.0, FontFamily::Proportional),
        ),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (
            TextStyle::Button,
            FontId::new(13.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Heading,
            FontId::new(16.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
    ]
    .into();

    ctx.set_style(style);
}
