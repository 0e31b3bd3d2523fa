// File: crates/netscatter-core/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, opaque white background, tight cropping and plot-area layout.

use netscatter_core::{sample_records, Axis, NetworkRecord, RenderOptions, ScatterChart};

fn opts(dpi: f32, crop: bool) -> RenderOptions {
    RenderOptions { dpi, draw_labels: false, tight_crop: crop, ..RenderOptions::default() }
}

#[test]
fn render_rgba8_buffer() {
    let chart = ScatterChart::from_records(sample_records()).unwrap();
    let (px, w, h, stride) = chart.render_to_rgba8(&opts(30.0, false)).expect("rgba render");
    assert_eq!((w, h), (360, 240), "12x8 inches at 30 dpi");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque white.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn tight_crop_shrinks_and_keeps_white_corners() {
    let chart = ScatterChart::from_records(sample_records()).unwrap();
    let (px, w, h, stride) = chart.render_to_rgba8(&opts(30.0, true)).expect("rgba render");
    assert!(w < 360 && h < 240, "cropped to {w}x{h}");
    assert!(w > 0 && h > 0);

    let corner = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    let last_x = w as usize - 1;
    let last_y = h as usize - 1;
    for (x, y) in [(0, 0), (last_x, 0), (0, last_y), (last_x, last_y)] {
        assert_eq!(corner(x, y), &[255, 255, 255, 255], "corner ({x},{y})");
    }
}

#[test]
fn png_decodes_with_cropped_size() {
    let chart = ScatterChart::from_records(sample_records()).unwrap();
    let o = opts(30.0, true);
    let (_, w, h, _) = chart.render_to_rgba8(&o).unwrap();
    let bytes = chart.render_to_png_bytes(&o).unwrap();
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (w, h));
}

// ---- layout in pixels ---------------------------------------------------------
// At 72 dpi one point is one pixel: the canvas is 864x576.

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> &[u8] {
    &px[y * stride + x * 4..y * stride + x * 4 + 4]
}

fn is_white(p: &[u8]) -> bool {
    p[..3] == [255, 255, 255]
}

/// Marker fills are saturated; spines, grid and background are grey.
fn is_coloured(p: &[u8]) -> bool {
    let hi = p[..3].iter().max().copied().unwrap_or(0);
    let lo = p[..3].iter().min().copied().unwrap_or(0);
    hi - lo > 30
}

/// (left, top, right, bottom) of the plot frame in pixels.
fn plot_rect(o: &RenderOptions) -> (usize, usize, usize, usize) {
    let ins = o.insets.scaled(o.px_per_pt());
    let (w, h) = o.pixel_size();
    (
        ins.left.round() as usize,
        ins.top.round() as usize,
        (w - ins.right.round() as i32) as usize,
        (h - ins.bottom.round() as i32) as usize,
    )
}

/// First and last non-white row in column `x`.
fn column_extent(px: &[u8], stride: usize, h: usize, x: usize) -> Option<(usize, usize)> {
    let rows = (0..h).filter(|&y| !is_white(pixel(px, stride, x, y))).collect::<Vec<_>>();
    Some((*rows.first()?, *rows.last()?))
}

#[test]
fn colorbar_spans_the_plot_height() {
    let o = opts(72.0, false);
    let chart = ScatterChart::from_records(sample_records()).unwrap();
    let (px, w, h, stride) = chart.render_to_rgba8(&o).unwrap();
    let (w, h) = (w as usize, h as usize);
    let (left, top, right, bottom) = plot_rect(&o);

    // Left spine column: the frame's vertical extent.
    let spine = column_extent(&px, stride, h, left).expect("left spine drawn");
    assert!(spine.0.abs_diff(top) <= 1 && spine.1.abs_diff(bottom) <= 1, "spine rows {spine:?}");

    // The bar is the first run of non-white pixels right of the frame on the middle row.
    let mid = (top + bottom) / 2;
    let bar_cols = (right + 2..w)
        .skip_while(|&x| is_white(pixel(&px, stride, x, mid)))
        .take_while(|&x| !is_white(pixel(&px, stride, x, mid)))
        .collect::<Vec<_>>();
    assert!(bar_cols.len() > 2, "colour bar not found");
    let bar_x = bar_cols[bar_cols.len() / 2];
    assert!(is_coloured(pixel(&px, stride, bar_x, mid)));

    let bar = column_extent(&px, stride, h, bar_x).unwrap();
    assert_eq!(bar, spine, "bar rows vs frame rows");
}

#[test]
fn markers_are_clipped_to_the_plot_area() {
    let records = vec![
        NetworkRecord::new("inside", 78.5, 5.0, 1.0),
        // straddles the right spine
        NetworkRecord::new("right", 78.5, 10.1, 2.0),
        // wholly left of the frame
        NetworkRecord::new("left", 78.5, -0.25, 3.0),
        NetworkRecord::new("above", 80.1, 5.0, 4.0),
        NetworkRecord::new("below", 76.9, 5.0, 5.0),
    ];
    let mut chart = ScatterChart::from_records(records).unwrap();
    chart.x_axis = Axis::new("Params (M)", 0.0, 10.0);
    chart.y_axis = Axis::new("mIoU", 77.0, 80.0);

    let o = opts(72.0, false);
    let (px, w, h, stride) = chart.render_to_rgba8(&o).unwrap();
    let (left, top, right, bottom) = plot_rect(&o);
    let (w, h) = (w as usize, h as usize);
    // Colour bar starts 18 pt right of the frame.
    let bar_left = right + 18;

    let mut inside = 0;
    for y in 0..h {
        for x in 0..w.min(bar_left - 1) {
            let p = pixel(&px, stride, x, y);
            let in_frame = (left - 1..=right + 1).contains(&x) && (top - 1..=bottom + 1).contains(&y);
            if in_frame {
                inside += is_coloured(p) as usize;
            } else {
                assert!(!is_coloured(p), "marker ink outside the frame at ({x},{y}): {p:?}");
            }
        }
    }
    assert!(inside > 0, "markers inside the frame were drawn");
}

/// Column range of pixels inside the frame that change when labels are drawn.
fn label_columns(name: &str) -> Option<(usize, usize)> {
    let chart = ScatterChart::from_records(vec![NetworkRecord::new(name, 78.0, 5.0, 2.0)]).unwrap();
    let bare = opts(72.0, false);
    let labelled = RenderOptions { draw_labels: true, ..opts(72.0, false) };
    let (a, _, _, stride) = chart.render_to_rgba8(&bare).unwrap();
    let (b, _, _, _) = chart.render_to_rgba8(&labelled).unwrap();
    let (left, top, right, bottom) = plot_rect(&bare);

    let mut cols = (usize::MAX, 0);
    for y in top + 2..bottom - 1 {
        for x in left + 2..right - 1 {
            if pixel(&a, stride, x, y) != pixel(&b, stride, x, y) {
                cols = (cols.0.min(x), cols.1.max(x));
            }
        }
    }
    (cols.0 <= cols.1).then_some(cols)
}

#[test]
fn label_anchor_follows_placement() {
    // A single record sits in the middle of the frame; the label anchor is 12.5 pt to its right.
    let o = opts(72.0, false);
    let (left, _, right, _) = plot_rect(&o);
    let marker_x = (left + right) / 2;
    let anchor_x = marker_x + 12;

    let (Some(tucked), Some(plain)) = (label_columns("TransFuse"), label_columns("UNet")) else {
        eprintln!("no fonts available; skipping label anchor check");
        return;
    };
    // Right-aligned: text ends at the anchor and runs back across the marker.
    assert!(tucked.1 <= anchor_x + 3, "TransFuse columns {tucked:?}");
    assert!(tucked.0 < marker_x, "TransFuse columns {tucked:?}");
    // Left-aligned: text starts at the anchor.
    assert!(plain.0 + 2 >= anchor_x, "UNet columns {plain:?}");
}
