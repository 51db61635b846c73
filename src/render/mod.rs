pub mod camera;
pub mod colormap;
pub mod raster;
pub mod text;

use crate::engine::pipeline::NodeCloud;

/// Rendering mode for the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Observer cone: visible nodes red, the rest gray
    Observer,
    /// Static overlay: nodes colored by curvature residual, seeds connected
    Residual,
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::Observer
    }
}

/// Axis-aligned plot bounds `[min, max]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
    pub z: [f64; 2],
}

impl SceneBounds {
    /// Fixed limits used by the observer view.
    pub const OBSERVER: SceneBounds = SceneBounds {
        x: [-10.0, 10.0],
        y: [-10.0, 10.0],
        z: [0.0, 20.0],
    };

    /// Fallback when there is nothing to plot.
    pub const EMPTY: SceneBounds = SceneBounds {
        x: [-10.0, 10.0],
        y: [-10.0, 10.0],
        z: [0.0, 10.0],
    };

    /// Data-driven limits: ±1.1 × max radius, `[0, 1.1 × max z]`.
    pub fn from_cloud(cloud: &NodeCloud) -> Self {
        match cloud.extent() {
            Some((r, z)) => {
                let r = r * 1.1;
                SceneBounds {
                    x: [-r, r],
                    y: [-r, r],
                    z: [0.0, z * 1.1],
                }
            }
            None => Self::EMPTY,
        }
    }

    /// Bounds appropriate for `mode`.
    pub fn for_mode(mode: RenderMode, cloud: &NodeCloud) -> Self {
        match mode {
            RenderMode::Observer => Self::OBSERVER,
            RenderMode::Residual => Self::from_cloud(cloud),
        }
    }

    pub fn center(&self) -> [f64; 3] {
        [
            (self.x[0] + self.x[1]) * 0.5,
            (self.y[0] + self.y[1]) * 0.5,
            (self.z[0] + self.z[1]) * 0.5,
        ]
    }

    /// Half of the box diagonal.
    pub fn half_diagonal(&self) -> f64 {
        let dx = self.x[1] - self.x[0];
        let dy = self.y[1] - self.y[0];
        let dz = self.z[1] - self.z[0];
        0.5 * (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// The 12 edges of the bounding box.
    pub fn edges(&self) -> [[[f64; 3]; 2]; 12] {
        let c = |i: usize| {
            [
                self.x[i & 1],
                self.y[(i >> 1) & 1],
                self.z[(i >> 2) & 1],
            ]
        };
        [
            [c(0), c(1)],
            [c(2), c(3)],
            [c(4), c(5)],
            [c(6), c(7)],
            [c(0), c(2)],
            [c(1), c(3)],
            [c(4), c(6)],
            [c(5), c(7)],
            [c(0), c(4)],
            [c(1), c(5)],
            [c(2), c(6)],
            [c(3), c(7)],
        ]
    }
}
