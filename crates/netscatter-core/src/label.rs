// File: crates/netscatter-core/src/label.rs
// Summary: Per-record label placement (offset + anchor) and label colour.

/// Name drawn in the highlight colour by default.
pub const DEFAULT_HIGHLIGHT: &str = "SELUNet(Ours)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Where a label goes relative to its marker. Offsets are in points with +y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub dx: f32,
    pub dy: f32,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

impl Placement {
    pub const DEFAULT: Placement = Placement { dx: 12.5, dy: 9.1, h_align: HAlign::Left, v_align: VAlign::Bottom };
    pub const TUCKED: Placement = Placement { dx: 12.5, dy: -15.0, h_align: HAlign::Right, v_align: VAlign::Center };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelTone {
    Normal,
    Highlight,
}

/// Exact, case-sensitive name rules plus the highlight sentinel.
#[derive(Clone, Debug)]
pub struct LabelPolicy {
    pub rules: Vec<(String, Placement)>,
    pub fallback: Placement,
    pub highlight: String,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                ("LB-Unet".to_string(), Placement::TUCKED),
                ("TransFuse".to_string(), Placement::TUCKED),
            ],
            fallback: Placement::DEFAULT,
            highlight: DEFAULT_HIGHLIGHT.to_string(),
        }
    }
}

impl LabelPolicy {
    pub fn with_highlight(mut self, name: impl Into<String>) -> Self {
        self.highlight = name.into();
        self
    }

    pub fn placement(&self, name: &str) -> Placement {
        self.rules
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| *p)
            .unwrap_or(self.fallback)
    }

    pub fn tone(&self, name: &str) -> LabelTone {
        if name == self.highlight { LabelTone::Highlight } else { LabelTone::Normal }
    }
}
