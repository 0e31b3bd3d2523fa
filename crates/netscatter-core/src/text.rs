// File: crates/netscatter-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout: serif/sans families, bold weight, anchors.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::label::{HAlign, VAlign};

pub const SERIF_FAMILIES: &[&str] = &["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif", "serif"];
pub const SANS_FAMILIES: &[&str] = &["DejaVu Sans", "Arial", "Helvetica", "Liberation Sans", "sans-serif"];

/// Font request for one run of text. `size` is in pixels.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub families: &'static [&'static str],
}

impl TextSpec {
    pub fn sans(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false, families: SANS_FAMILIES }
    }
    pub fn serif(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false, families: SERIF_FAMILIES }
    }
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        ts.set_font_families(spec.families);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of the laid-out text.
    pub fn measure(&self, text: &str, spec: &TextSpec) -> (f32, f32) {
        let p = self.layout(text, spec);
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that the anchor point `(x, y)` sits on the given edges
    /// of its bounding box.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        spec: &TextSpec,
        h: HAlign,
        v: VAlign,
    ) {
        let mut p = self.layout(text, spec);
        let (w, ht) = (p.longest_line(), p.height());
        let (left, top) = anchor_origin(x, y, w, ht, h, v);
        p.paint(canvas, (left, top));
    }

    /// Draw `text` rotated 90 degrees counter-clockwise, centred on `(cx, cy)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, spec: &TextSpec) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
        self.draw_anchored(canvas, text, cx, cy, spec, HAlign::Center, VAlign::Center);
        canvas.restore();
    }
}

/// Top-left corner of a `w` x `h` box whose anchor edges meet `(x, y)`.
pub fn anchor_origin(x: f32, y: f32, w: f32, h: f32, ha: HAlign, va: VAlign) -> (f32, f32) {
    let left = match ha {
        HAlign::Left => x,
        HAlign::Center => x - w * 0.5,
        HAlign::Right => x - w,
    };
    let top = match va {
        VAlign::Top => y,
        VAlign::Center => y - h * 0.5,
        VAlign::Bottom => y - h,
    };
    (left, top)
}
