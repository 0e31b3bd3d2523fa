// File: crates/netscatter-core/src/types.rs
// Summary: Shared types and constants (figure size, dpi, paddings in points).

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 12.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 8.0;
/// Default output resolution.
pub const DEFAULT_DPI: f32 = 300.0;
/// Points per inch; all font sizes and offsets are specified in points.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Padding kept around drawn content when cropping, in inches.
pub const CROP_PAD_IN: f32 = 0.1;

/// Figure margins around the plotting area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same insets converted to pixels at `px_per_pt`.
    pub fn scaled(&self, px_per_pt: f32) -> Self {
        Self::new(self.left * px_per_pt, self.right * px_per_pt, self.top * px_per_pt, self.bottom * px_per_pt)
    }
}

impl Default for Insets {
    // Right side leaves room for the colour bar, its tick labels and title.
    fn default() -> Self {
        Self::new(64.0, 120.0, 24.0, 54.0)
    }
}
