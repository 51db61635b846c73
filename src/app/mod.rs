//! `OctaveApp` — the top-level egui application state.
//!
//! This module declares the `OctaveApp` struct, its constructor and the
//! `eframe::App` impl. All methods are split across the sibling sub-modules:
//!
//! - `session` — observer updates, export and snapshot triggers
//! - `toolbar` — slider, mode selector and buttons
//! - `content` — 3-D viewport and stats panel

pub mod session;
pub mod toolbar;
pub mod content;

use eframe::egui;

use octave3d::config::SceneConfig;
use octave3d::engine::pipeline::NodeCloud;
use octave3d::overlay::ResidualSummary;
use octave3d::render::camera::CameraParams;
use octave3d::render::RenderMode;
use octave3d::visibility::{ObserverState, VisibilityFilter, VisibleSet};

// ─── Application state ───────────────────────────────────────────────────────

pub struct OctaveApp {
    pub config: SceneConfig,
    pub cloud: NodeCloud,
    /// Set when the pipeline failed; the viewer then shows an empty scene.
    pub error: Option<String>,
    pub filter: VisibilityFilter,
    pub observer: ObserverState,
    /// Slider value in degrees, `[0, 360]`.
    pub observer_deg: f64,
    pub visible: VisibleSet,
    /// Per-node curvature residual, in node order.
    pub residuals: Vec<f64>,
    pub summary: Option<ResidualSummary>,
    pub omega: f64,
    pub render_mode: RenderMode,
    pub show_stats: bool,
    pub dark_mode: bool,
    // 3-D camera state
    pub cam_params: CameraParams,
    /// Mode the camera was last framed for
    pub cam_fitted_for: Option<RenderMode>,
    /// Transient "Saved!" label on the export button
    pub saved_at: Option<std::time::Instant>,
    pub status: Option<String>,
}

impl OctaveApp {
    pub fn new(config: SceneConfig) -> Self {
        let (cloud, error) = match config.engine().build() {
            Ok(cloud) => (cloud, None),
            Err(e) => {
                log::error!("node pipeline failed: {}", e);
                (NodeCloud::default(), Some(e.to_string()))
            }
        };

        let constants = config.constants;
        let residuals = cloud
            .nodes
            .iter()
            .map(|n| constants.curvature_residual(n.theta))
            .collect::<Vec<_>>();
        let summary = ResidualSummary::from_residuals(residuals.iter().copied());

        let mut app = Self {
            filter: VisibilityFilter::new(constants),
            observer: ObserverState::new(config.initial_observer_deg, config.threshold_rad()),
            observer_deg: config.initial_observer_deg,
            visible: VisibleSet::default(),
            residuals,
            summary,
            omega: constants.omega(),
            render_mode: RenderMode::Observer,
            show_stats: true,
            dark_mode: false,
            cam_params: CameraParams::default(),
            cam_fitted_for: None,
            saved_at: None,
            status: None,
            error,
            cloud,
            config,
        };
        app.log_run_summary();
        app.set_observer_deg(app.observer_deg);
        app
    }
}

impl Default for OctaveApp {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl eframe::App for OctaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply dark/light visuals
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        // Stats side panel
        if self.show_stats {
            egui::SidePanel::right("stats")
                .default_width(280.0)
                .show(ctx, |ui| {
                    self.draw_stats_panel(ui);
                });
        }

        // Main viewport
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });
    }
}
