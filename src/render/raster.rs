//! Offline snapshot of the residual view.
//!
//! The node cloud is projected through a [`CameraParams`], turned into a
//! flat list of alpha-blended disc stamps (connector lines are sampled into
//! small stamps, nodes become larger ones) and rasterized with rayon,
//! one image row per task. Stamp order is preserved within each row, so
//! output is deterministic.

use image::RgbImage;
use rayon::prelude::*;
use std::path::Path;

use super::camera::CameraParams;
use super::colormap::{coolwarm_map, seed_color};
use crate::engine::pipeline::NodeCloud;
use crate::error::{OctaveError, Result};
use crate::overlay::{OverlayConstants, ResidualSummary};

const BACKGROUND: [u8; 3] = [255, 255, 255];
const NODE_RADIUS: f32 = 3.0;
const LINE_RADIUS: f32 = 0.8;
const LINE_ALPHA: f32 = 0.4;

/// Antialiased filled disc.
#[derive(Debug, Clone, Copy)]
struct Stamp {
    cx: f32,
    cy: f32,
    radius: f32,
    color: [u8; 3],
    alpha: f32,
}

fn to_pixel(ndc: [f32; 2], width: u32, height: u32) -> (f32, f32) {
    (
        (ndc[0] * 0.5 + 0.5) * width as f32,
        (ndc[1] * 0.5 + 0.5) * height as f32,
    )
}

fn build_stamps(
    cloud: &NodeCloud,
    constants: &OverlayConstants,
    camera: &CameraParams,
    width: u32,
    height: u32,
) -> Vec<Stamp> {
    let aspect = width as f32 / height as f32;

    let projected: Vec<Option<(f32, f32)>> = cloud
        .nodes
        .par_iter()
        .map(|n| {
            camera
                .project([n.x, n.y, n.z], aspect)
                .map(|p| to_pixel(p.ndc, width, height))
        })
        .collect();

    let mut stamps = Vec::new();

    // Connectors: consecutive nodes of the same seed, in the seed's color
    for (i, pair) in cloud.nodes.windows(2).enumerate() {
        if pair[0].seed != pair[1].seed {
            continue;
        }
        if let (Some(a), Some(b)) = (projected[i], projected[i + 1]) {
            let color = seed_color(pair[0].seed);
            let len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
            let steps = (len / 0.75).ceil().max(1.0) as usize;
            for s in 0..=steps {
                let t = s as f32 / steps as f32;
                stamps.push(Stamp {
                    cx: a.0 + (b.0 - a.0) * t,
                    cy: a.1 + (b.1 - a.1) * t,
                    radius: LINE_RADIUS,
                    color,
                    alpha: LINE_ALPHA,
                });
            }
        }
    }

    // Nodes, colored by residual
    if let Some(summary) = ResidualSummary::from_nodes(&cloud.nodes, constants) {
        for (node, p) in cloud.nodes.iter().zip(&projected) {
            if let Some((cx, cy)) = *p {
                let r = constants.curvature_residual(node.theta);
                stamps.push(Stamp {
                    cx,
                    cy,
                    radius: NODE_RADIUS,
                    color: coolwarm_map(r, summary.min, summary.max),
                    alpha: 1.0,
                });
            }
        }
    }

    stamps
}

fn blend(dst: &mut [u8], color: [u8; 3], alpha: f32) {
    for c in 0..3 {
        let d = dst[c] as f32;
        dst[c] = (d + (color[c] as f32 - d) * alpha).round() as u8;
    }
}

/// Rasterize the residual view into an RGB image.
pub fn render_residual(
    cloud: &NodeCloud,
    constants: &OverlayConstants,
    camera: &CameraParams,
    width: u32,
    height: u32,
) -> RgbImage {
    let stamps = build_stamps(cloud, constants, camera, width, height);
    let mut img = RgbImage::from_pixel(width, height, image::Rgb(BACKGROUND));
    let row_size = width as usize * 3;
    if row_size == 0 {
        return img;
    }

    img.par_chunks_exact_mut(row_size)
        .enumerate()
        .for_each(|(py, row)| {
            let y = py as f32 + 0.5;
            for s in &stamps {
                let dy = y - s.cy;
                if dy.abs() > s.radius + 0.5 {
                    continue;
                }
                let x0 = (s.cx - s.radius - 1.0).floor().max(0.0) as usize;
                let x1 = ((s.cx + s.radius + 1.0).ceil().max(0.0) as usize).min(width as usize);
                for px in x0..x1 {
                    let dx = px as f32 + 0.5 - s.cx;
                    let dist = (dx * dx + dy * dy).sqrt();
                    let coverage = (s.radius + 0.5 - dist).clamp(0.0, 1.0);
                    if coverage > 0.0 {
                        blend(&mut row[px * 3..px * 3 + 3], s.color, coverage * s.alpha);
                    }
                }
            }
        });

    img
}

/// Render and save the residual view as PNG.
pub fn save_residual_png(
    path: &Path,
    cloud: &NodeCloud,
    constants: &OverlayConstants,
    camera: &CameraParams,
    width: u32,
    height: u32,
) -> Result<()> {
    let img = render_residual(cloud, constants, camera, width, height);
    img.save(path).map_err(|source| OctaveError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Plot saved as '{}'", path.display());
    Ok(())
}
