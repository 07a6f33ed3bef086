//! Text label to sparse background point set.
//!
//! Drawing the label is delegated to a [`TextRaster`] (the browser uses an
//! offscreen 2D canvas); this module only samples the resulting pixels. A
//! source that cannot draw (no context, font not loaded) yields an empty
//! watermark rather than an error.

use super::constants::{WATERMARK_DEPTH, WATERMARK_SCALE, WATERMARK_THRESHOLD};
use glam::Vec3;

/// Tightly packed RGBA8 pixels, row-major, origin top-left.
#[derive(Clone, Debug)]
pub struct Raster {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Raster {
    /// Returns `None` when `rgba` is too short for the stated dimensions.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let needed = width as usize * height as usize * 4;
        (rgba.len() >= needed).then_some(Self { width, height, rgba })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn red(&self, x: u32, y: u32) -> u8 {
        self.rgba[(y as usize * self.width as usize + x as usize) * 4]
    }
}

/// Something that can draw a label into pixels.
pub trait TextRaster {
    /// Whether the label font can be drawn right now. Callers that can wait
    /// should let the font finish loading before asking.
    fn font_available(&self) -> bool {
        true
    }

    fn rasterize(&self, label: &str) -> Option<Raster>;
}

#[derive(Clone, Debug, Default)]
pub struct WatermarkPoints {
    pub points: Vec<Vec3>,
}

impl WatermarkPoints {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Scan `raster` every `cell_px` pixels and emit one world point per bright
/// sample, centred on the raster and pushed back to the watermark depth.
pub fn sample_raster(raster: &Raster, cell_px: u32) -> Vec<Vec3> {
    let step = cell_px.max(1) as usize;
    let cx = raster.width as f32 * 0.5;
    let cy = raster.height as f32 * 0.5;
    let mut points = Vec::new();
    for y in (0..raster.height).step_by(step) {
        for x in (0..raster.width).step_by(step) {
            if raster.red(x, y) > WATERMARK_THRESHOLD {
                points.push(Vec3::new(
                    (x as f32 - cx) * WATERMARK_SCALE,
                    (cy - y as f32) * WATERMARK_SCALE,
                    WATERMARK_DEPTH,
                ));
            }
        }
    }
    points
}

pub fn rasterize_text<T: TextRaster + ?Sized>(source: &T, label: &str, cell_px: u32) -> WatermarkPoints {
    if !source.font_available() {
        log::warn!("[watermark] font unavailable for '{}', drawing none", label);
        return WatermarkPoints::default();
    }
    match source.rasterize(label) {
        Some(raster) => {
            let points = sample_raster(&raster, cell_px);
            log::info!("[watermark] '{}' -> {} points", label, points.len());
            WatermarkPoints { points }
        }
        None => {
            log::warn!("[watermark] raster unavailable for '{}', drawing none", label);
            WatermarkPoints::default()
        }
    }
}
