//! Generic egui helpers shared by the viewport and the stats panel.
//!
//! Stateless functions only: color conversion, the per-seed palette,
//! projection to screen space and the colorbar widget.

use eframe::egui;
use octave3d::render::camera::CameraParams;
use octave3d::render::colormap::{self, coolwarm};

// ─── Colors ───────────────────────────────────────────────────────────────────

pub const HIDDEN: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);
pub const VISIBLE: egui::Color32 = egui::Color32::from_rgb(220, 30, 30);
pub const AXIS: egui::Color32 = egui::Color32::from_rgb(190, 190, 200);

pub fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

/// Per-seed palette color with opacity.
pub fn seed_color(seed: u64, alpha: f32) -> egui::Color32 {
    let [r, g, b] = colormap::seed_color(seed);
    egui::Color32::from_rgba_unmultiplied(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

// ─── Projection ───────────────────────────────────────────────────────────────

/// World point → screen position inside `rect`, with view depth.
pub fn to_screen(
    cam: &CameraParams,
    rect: egui::Rect,
    world: [f64; 3],
) -> Option<(egui::Pos2, f32)> {
    let aspect = rect.width() / rect.height().max(1.0);
    let p = cam.project(world, aspect)?;
    if p.ndc[0].abs() > 1.5 || p.ndc[1].abs() > 1.5 {
        return None;
    }
    let sx = rect.center().x + p.ndc[0] * rect.width() * 0.5;
    let sy = rect.center().y + p.ndc[1] * rect.height() * 0.5;
    Some((egui::pos2(sx, sy), p.depth))
}

// ─── Colorbar ─────────────────────────────────────────────────────────────────

/// Horizontal coolwarm bar labelled with `min` / `max`.
pub fn colorbar(ui: &mut egui::Ui, label: &str, min: f64, max: f64) {
    ui.label(label);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width().min(240.0), 14.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let steps = 64;
    let w = rect.width() / steps as f32;
    for i in 0..steps {
        let t = (i as f32 + 0.5) / steps as f32;
        let x = rect.left() + i as f32 * w;
        painter.rect_filled(
            egui::Rect::from_min_size(egui::pos2(x, rect.top()), egui::vec2(w + 0.5, rect.height())),
            0.0,
            rgb(coolwarm(t)),
        );
    }
    ui.horizontal(|ui| {
        ui.small(format!("{:.3}", min));
        ui.add_space((rect.width() - 80.0).max(0.0));
        ui.small(format!("{:.3}", max));
    });
}
