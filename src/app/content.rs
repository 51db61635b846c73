//! Main viewport and stats panel for `OctaveApp`.
//!
//! The viewport is a painter-only 3-D scatter: the camera orbits on drag and
//! zooms on scroll, nodes are depth-sorted back to front each frame.

use eframe::egui;

use octave3d::render::colormap::coolwarm_map;
use octave3d::render::text::{bridge_lines, MAX_LISTED_ROWS};
use octave3d::render::{RenderMode, SceneBounds};

use super::OctaveApp;
use crate::ui::{self, colorbar, seed_color, to_screen};

const ORBIT_SPEED: f32 = 0.01;

impl OctaveApp {
    // ── Viewport ─────────────────────────────────────────────────────────────

    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        if let Some(ref error) = self.error {
            ui.colored_label(egui::Color32::RED, error);
        }

        let bounds = SceneBounds::for_mode(self.render_mode, &self.cloud);
        if self.cam_fitted_for != Some(self.render_mode) {
            self.cam_params = self.cam_params.fitted(&bounds);
            self.cam_fitted_for = Some(self.render_mode);
        }

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let rect = response.rect;

        if response.dragged() {
            let d = response.drag_delta();
            self.cam_params.orbit(-d.x * ORBIT_SPEED, d.y * ORBIT_SPEED);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.cam_params.zoom((1.0 - scroll * 0.002).clamp(0.5, 2.0));
            }
        }

        let cam = self.cam_params;

        // Axes box
        for [a, b] in bounds.edges() {
            if let (Some((pa, _)), Some((pb, _))) =
                (to_screen(&cam, rect, a), to_screen(&cam, rect, b))
            {
                painter.line_segment([pa, pb], egui::Stroke::new(1.0, ui::AXIS));
            }
        }

        match self.render_mode {
            RenderMode::Observer => self.paint_observer(&painter, rect),
            RenderMode::Residual => self.paint_residual(&painter, rect),
        }

        painter.text(
            rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            "X, Y: octave phase   Z: recursion depth",
            egui::FontId::proportional(12.0),
            ui::HIDDEN,
        );
    }

    fn paint_observer(&self, painter: &egui::Painter, rect: egui::Rect) {
        let cam = &self.cam_params;

        // Observer ray on the base plane
        let (s, c) = self.observer.angle().sin_cos();
        if let (Some((o, _)), Some((tip, _))) = (
            to_screen(cam, rect, [0.0, 0.0, 0.0]),
            to_screen(cam, rect, [10.0 * c, 10.0 * s, 0.0]),
        ) {
            painter.line_segment([o, tip], egui::Stroke::new(2.0, ui::VISIBLE));
        }

        let mut points: Vec<(egui::Pos2, f32, bool)> = self
            .cloud
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| {
                to_screen(cam, rect, [n.x, n.y, n.z])
                    .map(|(p, depth)| (p, depth, self.visible.is_visible(i)))
            })
            .collect();
        points.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (p, _, visible) in points {
            let (radius, color) = if visible {
                (4.0, ui::VISIBLE)
            } else {
                (3.0, ui::HIDDEN)
            };
            painter.circle_filled(p, radius, color);
        }
    }

    fn paint_residual(&self, painter: &egui::Painter, rect: egui::Rect) {
        let cam = &self.cam_params;

        // Connectors per seed
        for (seed, _) in &self.cloud.sequences {
            let nodes = self.cloud.nodes_for_seed(*seed);
            let stroke = egui::Stroke::new(1.2, seed_color(*seed, 0.4));
            for pair in nodes.windows(2) {
                let a = to_screen(cam, rect, [pair[0].x, pair[0].y, pair[0].z]);
                let b = to_screen(cam, rect, [pair[1].x, pair[1].y, pair[1].z]);
                if let (Some((pa, _)), Some((pb, _))) = (a, b) {
                    painter.line_segment([pa, pb], stroke);
                }
            }
        }

        let Some(summary) = self.summary else {
            return;
        };

        let mut points: Vec<(egui::Pos2, f32, f64)> = self
            .cloud
            .nodes
            .iter()
            .zip(&self.residuals)
            .filter_map(|(n, &r)| to_screen(cam, rect, [n.x, n.y, n.z]).map(|(p, d)| (p, d, r)))
            .collect();
        points.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (p, _, r) in points {
            painter.circle_filled(p, 3.5, ui::rgb(coolwarm_map(r, summary.min, summary.max)));
        }
    }

    // ── Stats side panel ─────────────────────────────────────────────────────

    /// Render the right-side statistics panel.
    pub fn draw_stats_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Overlay");
        ui.separator();
        ui.label(format!("\u{3a9}_\u{39b} estimate: {:.6}", self.omega));
        ui.label(format!("Sequences: {}", self.cloud.sequences.len()));
        ui.label(format!("Nodes: {}", self.cloud.len()));

        if let Some(s) = self.summary {
            ui.label(format!("Residual range: [{:.4}, {:.4}]", s.min, s.max));
            ui.label(format!("Mean residual: {:.4}", s.mean));
            if self.render_mode == RenderMode::Residual {
                ui.add_space(4.0);
                colorbar(ui, "Recursive phase curvature residual (rad)", s.min, s.max);
            }
        }

        ui.separator();
        ui.heading("Observer");
        ui.label(format!("Angle: {:.1}\u{b0}", self.observer.angle_degrees()));
        ui.label(format!(
            "Cone: \u{b1}{:.1}\u{b0}",
            self.observer.threshold().to_degrees()
        ));
        ui.colored_label(
            ui::VISIBLE,
            format!("Visible: {}", self.visible.visible_count()),
        );
        ui.colored_label(
            ui::HIDDEN,
            format!("Hidden: {}", self.visible.hidden_count()),
        );

        ui.separator();
        ui.heading("Bridge Radius");
        let lines = bridge_lines(&self.visible.rows, MAX_LISTED_ROWS);
        if lines.is_empty() {
            ui.colored_label(ui::HIDDEN, "No nodes in view");
        }
        for line in lines {
            ui.label(egui::RichText::new(line).monospace().size(11.0));
        }

        if let Some(ref status) = self.status {
            ui.separator();
            ui.small(status);
        }
    }
}
