//! Toolbar rendering for `OctaveApp`.
//!
//! Draws the observer-angle slider, render-mode selector, export and
//! snapshot buttons, and the stats / dark-mode toggles.

use eframe::egui;
use octave3d::render::RenderMode;

use super::OctaveApp;

/// How long the export button reads "Saved!".
const SAVED_LABEL_SECS: f32 = 2.0;

impl OctaveApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Observer angle
            let mut deg = self.observer_deg;
            let slider = ui.add_enabled(
                self.render_mode == RenderMode::Observer,
                egui::Slider::new(&mut deg, 0.0..=360.0)
                    .text("Observer Angle (\u{b0})")
                    .fixed_decimals(1),
            );
            if slider.changed() {
                self.set_observer_deg(deg);
            }

            ui.separator();

            // Render mode selector
            egui::ComboBox::from_id_salt("render_mode")
                .selected_text(match self.render_mode {
                    RenderMode::Observer => "Observer",
                    RenderMode::Residual => "Residual",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.render_mode,
                        RenderMode::Observer,
                        "Observer Cone",
                    );
                    ui.selectable_value(
                        &mut self.render_mode,
                        RenderMode::Residual,
                        "Curvature Residual",
                    );
                });

            ui.separator();

            // Export (label flips to "Saved!" for a moment)
            let saved_recently = self
                .saved_at
                .map(|t| t.elapsed().as_secs_f32() < SAVED_LABEL_SECS)
                .unwrap_or(false);
            let label = if saved_recently { "Saved!" } else { "Save Visible Nodes" };
            if ui.button(label).clicked() {
                self.request_export();
            }
            if saved_recently {
                ctx.request_repaint_after(std::time::Duration::from_millis(250));
            }

            if ui.button("Save PNG").clicked() {
                self.save_snapshot();
            }

            ui.separator();
            ui.toggle_value(&mut self.show_stats, "Stats");

            // Dark mode toggle
            let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(dark_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }
}
