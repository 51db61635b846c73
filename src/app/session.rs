//! Session events for `OctaveApp`.
//!
//! The presentation layer talks to the core through two events:
//! `ObserverAngleChanged` (`set_observer_deg`) and `ExportRequested`
//! (`request_export`). The visible set produced by the first is passed by
//! reference to the second; nothing else is cached between them.

use octave3d::export::{export_visible, ExportOutcome};
use octave3d::render::camera::CameraParams;
use octave3d::render::raster::save_residual_png;
use octave3d::render::SceneBounds;

use super::OctaveApp;

const SNAPSHOT_SIZE: (u32, u32) = (1600, 1200);

impl OctaveApp {
    /// Recompute the visible set for a new observer angle (degrees).
    pub fn set_observer_deg(&mut self, degrees: f64) {
        self.observer_deg = degrees;
        self.observer.set_degrees(degrees);
        self.visible = self.filter.apply(&self.cloud.nodes, &self.observer);
    }

    /// Write the current visible set to the configured CSV path.
    pub fn request_export(&mut self) -> bool {
        let outcome = export_visible(&self.config.export_path, &self.visible);
        match &outcome {
            ExportOutcome::Written { path, rows } => {
                self.saved_at = Some(std::time::Instant::now());
                self.status = Some(format!("Saved {} nodes to {}", rows, path.display()));
            }
            ExportOutcome::Failed { error, .. } => {
                self.saved_at = None;
                self.status = Some(format!("Error saving file: {}", error));
            }
        }
        outcome.is_ok()
    }

    /// Rasterize the residual view to the configured PNG path.
    pub fn save_snapshot(&mut self) {
        let camera = CameraParams {
            azimuth: self.cam_params.azimuth,
            elevation: self.cam_params.elevation,
            ..CameraParams::default()
        }
        .fitted(&SceneBounds::from_cloud(&self.cloud));

        let (w, h) = SNAPSHOT_SIZE;
        match save_residual_png(
            &self.config.snapshot_path,
            &self.cloud,
            &self.config.constants,
            &camera,
            w,
            h,
        ) {
            Ok(()) => {
                self.status = Some(format!(
                    "Plot saved as '{}'",
                    self.config.snapshot_path.display()
                ));
            }
            Err(e) => {
                log::error!("snapshot failed: {}", e);
                self.status = Some(format!("Snapshot failed: {}", e));
            }
        }
    }

    /// Startup report: Ω estimate, counts and residual statistics.
    pub fn log_run_summary(&self) {
        log::info!(
            "Global \u{3a9}_\u{39b} Estimate from Recursive Curvature: {:.6}",
            self.omega
        );
        log::info!("Total data points: {}", self.cloud.len());
        log::info!("Number of sequences: {}", self.cloud.sequences.len());
        match self.summary {
            Some(s) => {
                log::info!("Curvature error range: [{:.4}, {:.4}]", s.min, s.max);
                log::info!("Mean curvature error: {:.4}", s.mean);
            }
            None => log::warn!("No curvature errors calculated - check data generation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octave3d::config::SceneConfig;

    #[test]
    fn observer_update_is_idempotent() {
        let mut app = OctaveApp::default();
        app.set_observer_deg(120.0);
        let first = app.visible.clone();
        app.set_observer_deg(120.0);
        assert_eq!(app.visible, first);
        assert!(first.visible_count() > 0);
    }

    #[test]
    fn initial_state_is_filtered() {
        let app = OctaveApp::default();
        assert_eq!(app.cloud.len(), 216);
        assert_eq!(app.visible.flags.len(), 216);
        assert!((app.omega - 0.6868154829687417).abs() < 1e-12);
    }

    #[test]
    fn export_failure_keeps_session_alive() {
        let config = SceneConfig {
            export_path: std::env::temp_dir()
                .join("octave3d-app-missing-dir")
                .join("visible_nodes.csv"),
            ..SceneConfig::default()
        };
        let _ = std::fs::remove_dir_all(std::env::temp_dir().join("octave3d-app-missing-dir"));
        let mut app = OctaveApp::new(config);
        assert!(!app.request_export());
        assert!(app.status.as_deref().unwrap_or("").starts_with("Error saving file"));
        app.set_observer_deg(40.0);
        assert!(app.visible.visible_count() > 0);
    }

    #[test]
    fn failed_pipeline_yields_empty_scene() {
        let config = SceneConfig {
            max_steps: 2,
            ..SceneConfig::default()
        };
        let app = OctaveApp::new(config);
        assert!(app.error.is_some());
        assert!(app.cloud.is_empty());
        assert!(app.visible.rows.is_empty());
        assert!(app.summary.is_none());
    }
}
