// File: crates/netscatter-core/src/theme.rs
// Summary: Colour themes for the scatter figure.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub spine: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub label: skia::Color,
    pub label_highlight: skia::Color,
    /// Marker opacity, 0..=255.
    pub marker_alpha: u8,
}

impl Theme {
    /// White paper figure: black text, red highlight.
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::from_argb(255, 255, 255, 255),
            // black at 30% opacity
            grid: skia::Color::from_argb(77, 0, 0, 0),
            spine: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            label: skia::Color::from_argb(255, 0, 0, 0),
            label_highlight: skia::Color::from_argb(255, 255, 0, 0),
            marker_alpha: 204,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(77, 235, 235, 245),
            spine: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            label: skia::Color::from_argb(255, 235, 235, 245),
            label_highlight: skia::Color::from_argb(255, 255, 90, 80),
            marker_alpha: 204,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to paper.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::paper)
}
