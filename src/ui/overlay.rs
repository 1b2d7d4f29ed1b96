use egui::{Color32, Context, RichText};

use crate::ui::state::HudState;
use crate::ui::theme::*;

pub fn draw_hud(ctx: &Context, hud: &HudState) {
    if !hud.visible {
        return;
    }

    egui::Area::new(egui::Id::new("hud_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_black_alpha(180))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));

                    ui.horizontal(|ui| {
                        ui.label(RichText::new("HULL").color(TEXT_BRIGHT).strong());
                        ui.label(RichText::new(hud.mode.label()).color(ACCENT_GREEN));
                    });
                    ui.label(
                        RichText::new(format!(
                            "Facets: {} | Vertices: {} | FPS: {:.0}",
                            fmt_num(hud.facets),
                            fmt_num(hud.vertices as usize),
                            hud.fps
                        ))
                        .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new("H - Toggle overlay | Esc - Quit").color(TEXT_MUTED));
                });
        });
}

fn fmt_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_num;

    #[test]
    fn compact_numbers() {
        assert_eq!(fmt_num(56), "56");
        assert_eq!(fmt_num(1_500), "1.5K");
        assert_eq!(fmt_num(2_340_000), "2.34M");
    }
}
