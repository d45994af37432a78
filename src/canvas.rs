use egui::{Pos2, Rect, Vec2};
use log::debug;

/// Size of the drawing surface in logical points and the display density
/// that maps them to physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    pub logical_size: Vec2,
    pub pixels_per_point: f32,
}

impl SurfaceMetrics {
    pub fn new(logical_size: Vec2, pixels_per_point: f32) -> Self {
        Self {
            logical_size,
            pixels_per_point,
        }
    }

    /// Size of the backing pixel buffer.
    pub fn physical_size(&self) -> [u32; 2] {
        let scaled = self.logical_size * self.pixels_per_point;
        [scaled.x.round() as u32, scaled.y.round() as u32]
    }
}

/// The drawing surface's placement on screen. Metrics are recomputed only
/// when the surface is resized or moved to a display of another density.
#[derive(Debug, Default)]
pub struct Canvas {
    origin: Pos2,
    metrics: Option<SurfaceMetrics>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates placement for this frame. Returns true when the metrics changed.
    pub fn resize(&mut self, rect: Rect, pixels_per_point: f32) -> bool {
        self.origin = rect.min;

        if !rect.is_positive() || !pixels_per_point.is_finite() || pixels_per_point <= 0.0 {
            if self.metrics.take().is_some() {
                debug!("drawing surface detached");
            }
            return false;
        }

        let metrics = SurfaceMetrics::new(rect.size(), pixels_per_point);
        if self.metrics == Some(metrics) {
            return false;
        }

        let [width, height] = metrics.physical_size();
        debug!(
            "drawing surface resized to {}x{} points, {}x{} pixels at {}x",
            metrics.logical_size.x, metrics.logical_size.y, width, height, pixels_per_point
        );
        self.metrics = Some(metrics);
        true
    }

    /// Top-left corner in the device frame.
    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    /// `None` until the surface has a non-empty area.
    pub fn metrics(&self) -> Option<SurfaceMetrics> {
        self.metrics
    }
}
