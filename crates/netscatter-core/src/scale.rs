// File: crates/netscatter-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for both axes.

use crate::axis::Axis;

/// Maps a data interval onto a pixel interval. `px_end` may be smaller than
/// `px_start` (screen Y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { px_start, px_end, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Horizontal scale: `axis.min` at `left`, `axis.max` at `right`.
    pub fn horizontal(axis: &Axis, left: f32, right: f32) -> Self {
        Self::new(left, right, axis.min, axis.max)
    }

    /// Vertical scale: `axis.min` at `bottom`, `axis.max` at `top`.
    pub fn vertical(axis: &Axis, top: f32, bottom: f32) -> Self {
        Self::new(bottom, top, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let len = self.px_end - self.px_start;
        if len.abs() < f32::EPSILON { return self.vmin; }
        self.vmin + ((px - self.px_start) / len) as f64 * (self.vmax - self.vmin)
    }
}
