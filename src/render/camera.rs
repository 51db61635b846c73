//! Orbit camera and perspective projection.
//!
//! World space is z-up (z = recursion depth). The camera orbits the target
//! around the z axis (azimuth) and tilts above the xy plane (elevation).
//! Projection yields normalized device coordinates with +y pointing down,
//! so callers map straight to screen or pixel space.

use super::SceneBounds;

/// Camera parameters for interactive 3D navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// Orbit angle around the z axis in radians
    pub azimuth: f32,
    /// Tilt in radians (0 = level, positive = looking down)
    pub elevation: f32,
    /// Distance from the camera to the target point
    pub distance: f32,
    /// Target point the camera looks at [x, y, z]
    pub target: [f32; 3],
    /// Horizontal field of view in radians
    pub fov: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            azimuth: 0.6,
            elevation: 0.45,
            distance: 40.0,
            target: [0.0, 0.0, 10.0],
            fov: 60.0_f32.to_radians(),
        }
    }
}

/// A projected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// `[-1, 1]` across the viewport, y down.
    pub ndc: [f32; 2],
    /// Distance along the view axis.
    pub depth: f32,
}

const NEAR: f32 = 0.1;
const MAX_ELEVATION: f32 = 1.5;

impl CameraParams {
    /// Frame `bounds` with the current orientation.
    pub fn fitted(mut self, bounds: &SceneBounds) -> Self {
        let c = bounds.center();
        self.target = [c[0] as f32, c[1] as f32, c[2] as f32];
        let half_fov = (self.fov * 0.5).max(0.05);
        self.distance = (bounds.half_diagonal() as f32 / half_fov.sin()).max(1.0);
        self
    }

    /// Drag-to-orbit.
    pub fn orbit(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(std::f32::consts::TAU);
        self.elevation = (self.elevation + d_elevation).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Scroll-to-zoom. `factor > 1` moves away.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(1.0, 1.0e4);
    }

    /// Project a world point. `None` when behind the near plane.
    pub fn project(&self, world: [f64; 3], aspect: f32) -> Option<Projected> {
        let px = world[0] as f32 - self.target[0];
        let py = world[1] as f32 - self.target[1];
        let pz = world[2] as f32 - self.target[2];

        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();

        // Azimuth: rotate around z
        let rx = px * cos_az - py * sin_az;
        let ry = px * sin_az + py * cos_az;

        // Elevation: camera sits at -y, raised, looking at the target
        let up = ry * sin_el + pz * cos_el;
        let depth = ry * cos_el - pz * sin_el + self.distance;

        if depth < NEAR {
            return None;
        }

        let tan_fov_h = (self.fov * 0.5).tan();
        Some(Projected {
            ndc: [
                rx / (depth * tan_fov_h),
                -up / (depth * tan_fov_h / aspect),
            ],
            depth,
        })
    }
}
