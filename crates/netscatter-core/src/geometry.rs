// File: crates/netscatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and tight cropping.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Grow by `pad` on every side, then clip to `0..width, 0..height`.
    pub fn outset_within(&self, pad: i32, width: i32, height: i32) -> Self {
        Self {
            left: clamp(self.left - pad, 0, width),
            top: clamp(self.top - pad, 0, height),
            right: clamp(self.right + pad, 0, width),
            bottom: clamp(self.bottom + pad, 0, height),
        }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Bounding box (right/bottom exclusive) of every pixel in a tightly packed
/// RGBA8 buffer that differs from `background`. `None` when the buffer holds
/// background only.
pub fn content_bounds(rgba: &[u8], width: usize, height: usize, background: [u8; 4]) -> Option<RectI32> {
    if width == 0 || height == 0 || rgba.len() < width * height * 4 {
        return None;
    }
    let mut left = usize::MAX;
    let mut top = usize::MAX;
    let mut right = 0usize;
    let mut bottom = 0usize;
    for (y, row) in rgba.chunks_exact(width * 4).take(height).enumerate() {
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px != background.as_slice() {
                left = left.min(x);
                right = right.max(x + 1);
                top = top.min(y);
                bottom = bottom.max(y + 1);
            }
        }
    }
    if left == usize::MAX {
        return None;
    }
    Some(RectI32::from_ltrb(left as i32, top as i32, right as i32, bottom as i32))
}
